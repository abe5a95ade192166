//! # AutoFeedback Strategy
//!
//! Generates automatic, template-based feedback for each graded question:
//! a confirmation for correct answers, the expected tokens for wrong ones,
//! and an explicit note when the question was left unanswered. Questions
//! excluded from scoring produce no feedback.

use crate::error::GraderError;
use crate::traits::feedback::{Feedback, FeedbackEntry};
use crate::types::QuestionResult;

/// Automatic feedback strategy.
#[derive(Debug)]
pub struct AutoFeedback;

impl Feedback for AutoFeedback {
    fn assemble_feedback(
        &self,
        results: &[QuestionResult],
    ) -> Result<Vec<FeedbackEntry>, GraderError> {
        let mut entries = Vec::new();

        for result in results {
            let message = match result.is_correct {
                None => continue,
                Some(true) => "Correct".to_string(),
                Some(false) => {
                    let answered = result
                        .student_answer
                        .as_deref()
                        .is_some_and(|raw| !raw.trim().is_empty());
                    if !answered {
                        "Not answered".to_string()
                    } else if !result.missed.is_empty() {
                        format!("Expected: {}", result.missed.join(", "))
                    } else {
                        "Incorrect".to_string()
                    }
                }
            };
            entries.push(FeedbackEntry {
                question: result.question_number,
                message,
            });
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use util::test_definition::QuestionType;

    fn result(
        number: u32,
        is_correct: Option<bool>,
        student: Option<&str>,
        missed: &[&str],
    ) -> QuestionResult {
        QuestionResult {
            question_number: number,
            question_type: QuestionType::ShortAnswer,
            student_answer: student.map(str::to_string),
            correct_answer: None,
            is_correct,
            matched: vec![],
            missed: missed.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn correct_answer_confirmed() {
        let feedback = AutoFeedback
            .assemble_feedback(&[result(1, Some(true), Some("paris"), &[])])
            .unwrap();
        assert_eq!(
            feedback,
            vec![FeedbackEntry {
                question: 1,
                message: "Correct".to_string(),
            }]
        );
    }

    #[test]
    fn wrong_answer_lists_expected_tokens() {
        let feedback = AutoFeedback
            .assemble_feedback(&[result(2, Some(false), Some("oak"), &["willow"])])
            .unwrap();
        assert_eq!(feedback[0].message, "Expected: willow");
    }

    #[test]
    fn unanswered_question_noted() {
        let feedback = AutoFeedback
            .assemble_feedback(&[result(3, Some(false), None, &["willow"])])
            .unwrap();
        assert_eq!(feedback[0].message, "Not answered");
    }

    #[test]
    fn ungraded_questions_produce_no_feedback() {
        let feedback = AutoFeedback
            .assemble_feedback(&[result(4, None, Some("my essay"), &[])])
            .unwrap();
        assert!(feedback.is_empty());
    }

    #[test]
    fn multiple_results_keep_numbering_order() {
        let feedback = AutoFeedback
            .assemble_feedback(&[
                result(1, Some(true), Some("a"), &[]),
                result(2, Some(false), Some("b"), &["c"]),
            ])
            .unwrap();
        assert_eq!(feedback.len(), 2);
        assert_eq!(feedback[0].question, 1);
        assert_eq!(feedback[1].question, 2);
    }
}
