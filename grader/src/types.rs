//! # Types Module
//!
//! Core data structures produced by the grading engine: per-number results,
//! per-question groupings, the score summary, and the diagnostics recorded
//! when grading degrades instead of failing.

use serde::Serialize;
use util::test_definition::QuestionType;

/// The outcome for one global question number.
///
/// `is_correct` is `None` for questions excluded from scoring (writing
/// tasks, unknown types, missing answer keys); review UIs still receive a
/// row for them. The matched/missed token lists record which expected
/// values the student hit or missed and drive the feedback strategies.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
    pub question_number: u32,
    pub question_type: QuestionType,
    pub student_answer: Option<String>,
    pub correct_answer: Option<String>,
    pub is_correct: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub matched: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missed: Vec<String>,
}

/// All results belonging to one authored question. Scalar questions hold a
/// single result; per-blank questions hold one result per consumed number.
#[derive(Debug, Clone)]
pub struct GradedQuestion {
    pub first_number: u32,
    pub results: Vec<QuestionResult>,
}

impl GradedQuestion {
    pub fn gradable_count(&self) -> u32 {
        self.results
            .iter()
            .filter(|r| r.is_correct.is_some())
            .count() as u32
    }

    pub fn correct_count(&self) -> u32 {
        self.results
            .iter()
            .filter(|r| r.is_correct == Some(true))
            .count() as u32
    }

    /// True when the question is gradable and every gradable number is
    /// correct.
    pub fn all_correct(&self) -> bool {
        self.gradable_count() > 0 && self.correct_count() == self.gradable_count()
    }
}

/// Aggregate outcome of one grading invocation. Created fresh per call and
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSummary {
    pub correct_count: u32,
    /// Number of scoring units; excludes writing and otherwise ungradable
    /// questions.
    pub total_gradable: u32,
    /// `round(100 * correct / total)`; 0 when nothing was gradable.
    pub percentage: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band: Option<f64>,
}

/// Data-quality conditions recorded while grading degraded instead of
/// failing. Surfaced to content authors, never to students.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Type tag not present in the registry; question excluded from
    /// scoring.
    UnknownQuestionType { question_number: u32, type_tag: String },
    /// Gradable question authored without a usable answer key.
    MissingAnswerKey { question_number: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(number: u32, is_correct: Option<bool>) -> QuestionResult {
        QuestionResult {
            question_number: number,
            question_type: QuestionType::ClozeTest,
            student_answer: None,
            correct_answer: None,
            is_correct,
            matched: vec![],
            missed: vec![],
        }
    }

    #[test]
    fn graded_question_counts() {
        let question = GradedQuestion {
            first_number: 4,
            results: vec![
                result(4, Some(true)),
                result(5, Some(false)),
                result(6, Some(true)),
            ],
        };
        assert_eq!(question.gradable_count(), 3);
        assert_eq!(question.correct_count(), 2);
        assert!(!question.all_correct());
    }

    #[test]
    fn ungradable_question_is_never_all_correct() {
        let question = GradedQuestion {
            first_number: 1,
            results: vec![result(1, None)],
        };
        assert_eq!(question.gradable_count(), 0);
        assert!(!question.all_correct());
    }

    #[test]
    fn question_result_serializes_camel_case() {
        let value = serde_json::to_value(result(7, Some(true))).unwrap();
        assert_eq!(value["questionNumber"], 7);
        assert_eq!(value["questionType"], "cloze-test");
        assert_eq!(value["isCorrect"], true);
    }

    #[test]
    fn diagnostic_serializes_with_kind_tag() {
        let diagnostic = Diagnostic::UnknownQuestionType {
            question_number: 3,
            type_tag: "essay-v2".to_string(),
        };
        let value = serde_json::to_value(&diagnostic).unwrap();
        assert_eq!(value["kind"], "unknown_question_type");
        assert_eq!(value["type_tag"], "essay-v2");
    }
}
