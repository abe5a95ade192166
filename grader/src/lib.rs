//! # Grader Library
//!
//! Core logic for automatic grading of language-test submissions. A test
//! definition (passages → sections → questions, each question carrying a
//! type tag and an answer key) is graded against a student's flat answer
//! map in a single synchronous pass: questions are numbered by a
//! depth-first walk, each answer is normalized and compared by its type's
//! strategy, and the results fold into a score summary with an optional
//! band conversion.
//!
//! ## Key Concepts
//! - **GradingJob**: the entry point representing one grading invocation.
//! - **Registry**: maps each question type to its comparison strategy;
//!   the extension point for new types.
//! - **Comparators**: pluggable strategies for comparing answers
//!   (free text, single choice, multi-select, ordered).
//! - **Feedback**: pluggable generation of per-question feedback entries.
//! - **Reports**: structured output with the summary, per-question
//!   results, and content-authoring diagnostics.
//!
//! Grading never fails for data-quality reasons: unknown types, missing
//! keys and malformed answers degrade to ungradable or incorrect results
//! with a diagnostic, so a submission always receives a score.

pub mod comparators;
pub mod error;
pub mod feedback;
pub mod numbering;
pub mod registry;
pub mod report;
pub mod scorer;
pub mod traits;
pub mod types;
pub mod utilities;
pub mod validator;

use chrono::Utc;
use tracing::warn;

use crate::error::GraderError;
use crate::feedback::auto_feedback::AutoFeedback;
use crate::feedback::manual_feedback::ManualFeedback;
use crate::numbering::{NumberedQuestion, answer_for, walk};
use crate::registry::{Resolution, Strategy};
use crate::report::GradeReport;
use crate::traits::comparator::AnswerCheck;
use crate::traits::feedback::Feedback;
use crate::types::{Diagnostic, GradedQuestion, QuestionResult};
use crate::utilities::text_normalization::is_unanswered;
use util::grading_config::{FeedbackScheme, GradingConfig};
use util::submission::{AnswerMap, Submission};
use util::test_definition::{AnswerKey, Question, Test};

/// Represents one grading invocation for a single submission.
///
/// The test and answer map stay owned by the caller; the job borrows them
/// for the duration of [`GradingJob::grade`] and the report holds no
/// reference to either afterwards.
pub struct GradingJob<'a> {
    test: &'a Test,
    answers: &'a AnswerMap,
    submission_id: String,
    config: GradingConfig,
    feedback: Option<Box<dyn Feedback + 'a>>,
}

impl<'a> GradingJob<'a> {
    pub fn new(test: &'a Test, answers: &'a AnswerMap, config: GradingConfig) -> Self {
        Self {
            test,
            answers,
            submission_id: String::new(),
            config,
            feedback: None,
        }
    }

    /// Build a job from a submission record, seeding the report's
    /// identifying fields.
    pub fn for_submission(test: &'a Test, submission: &'a Submission, config: GradingConfig) -> Self {
        let mut job = Self::new(test, &submission.answers, config);
        job.submission_id = submission.id.clone();
        job
    }

    pub fn with_submission_id(mut self, id: impl Into<String>) -> Self {
        self.submission_id = id.into();
        self
    }

    /// Replace the configured feedback scheme with a custom strategy.
    pub fn with_feedback<F: Feedback + 'a>(mut self, feedback: F) -> Self {
        self.feedback = Some(Box::new(feedback));
        self
    }

    /// Grade the submission and produce a report.
    ///
    /// # Steps
    /// 1. Validate the band table in effect for the test's format.
    /// 2. Walk the question tree, assigning global numbers and spans.
    /// 3. Resolve each question's strategy, fetch the student's value(s)
    ///    by number, normalize both sides and compare.
    /// 4. Fold the per-question outcomes into a [`types::ScoreSummary`]
    ///    under the configured blank-scoring policy.
    /// 5. Assemble feedback entries and the final [`GradeReport`].
    ///
    /// Data-quality problems (unknown types, missing keys, stale answer
    /// keys) never produce an `Err`; they degrade with a diagnostic.
    pub fn grade(self) -> Result<GradeReport, GraderError> {
        let band_table = self.config.band_table_for(self.test.format);
        if let Some(table) = &band_table {
            table.validate().map_err(GraderError::InvalidBandTable)?;
        }

        let mut graded: Vec<GradedQuestion> = Vec::new();
        let mut diagnostics: Vec<Diagnostic> = Vec::new();

        for nq in walk(self.test) {
            match registry::resolve(&nq.question.question_type) {
                Resolution::Unknown(tag) => {
                    warn!(
                        question_number = nq.number,
                        type_tag = %tag,
                        "unknown question type; excluded from scoring"
                    );
                    diagnostics.push(Diagnostic::UnknownQuestionType {
                        question_number: nq.number,
                        type_tag: tag,
                    });
                    graded.push(ungraded(&nq, self.answers));
                }
                Resolution::Manual => {
                    graded.push(ungraded(&nq, self.answers));
                }
                Resolution::Auto(strategy) => match &nq.question.correct_answer {
                    Some(key) if !key.is_empty() => {
                        graded.push(grade_question(
                            &nq,
                            key,
                            strategy,
                            self.answers,
                            &mut diagnostics,
                        ));
                    }
                    _ => {
                        warn!(
                            question_number = nq.number,
                            "question has no answer key; marked ungradable"
                        );
                        diagnostics.push(Diagnostic::MissingAnswerKey {
                            question_number: nq.number,
                        });
                        graded.push(ungraded(&nq, self.answers));
                    }
                },
            }
        }

        let summary = scorer::compute_summary(
            &graded,
            self.config.scoring.blank_scoring,
            band_table.as_ref(),
        );

        let results: Vec<QuestionResult> = graded
            .into_iter()
            .flat_map(|question| question.results)
            .collect();

        let feedback = match &self.feedback {
            Some(strategy) => strategy.assemble_feedback(&results)?,
            None => match self.config.scoring.feedback_scheme {
                FeedbackScheme::Auto => AutoFeedback.assemble_feedback(&results)?,
                FeedbackScheme::Manual => ManualFeedback::default().assemble_feedback(&results)?,
                FeedbackScheme::None => Vec::new(),
            },
        };

        Ok(GradeReport {
            submission_id: self.submission_id,
            test_id: self.test.id.clone(),
            correct: summary.correct_count,
            total: summary.total_gradable,
            score_percentage: summary.percentage,
            band: summary.band,
            generated_at: Utc::now().to_rfc3339(),
            summary,
            results,
            feedback,
            diagnostics,
        })
    }
}

/// Results for a question excluded from scoring: one null-correctness row
/// per consumed number, echoing whatever the student submitted.
fn ungraded(nq: &NumberedQuestion<'_>, answers: &AnswerMap) -> GradedQuestion {
    let results = (0..nq.span)
        .map(|offset| {
            let number = nq.number + offset;
            QuestionResult {
                question_number: number,
                question_type: nq.question.question_type.clone(),
                student_answer: answer_for(answers, number).map(str::to_string),
                correct_answer: None,
                is_correct: None,
                matched: vec![],
                missed: vec![],
            }
        })
        .collect();
    GradedQuestion {
        first_number: nq.number,
        results,
    }
}

fn grade_question(
    nq: &NumberedQuestion<'_>,
    key: &AnswerKey,
    strategy: Strategy,
    answers: &AnswerMap,
    diagnostics: &mut Vec<Diagnostic>,
) -> GradedQuestion {
    let results = match key {
        AnswerKey::List(slots) if strategy.expands_array_keys() => slots
            .iter()
            .enumerate()
            .map(|(i, slot_key)| {
                let number = nq.number + i as u32;
                if slot_key.trim().is_empty() {
                    warn!(
                        question_number = number,
                        "blank has no answer key; marked ungradable"
                    );
                    diagnostics.push(Diagnostic::MissingAnswerKey {
                        question_number: number,
                    });
                    return QuestionResult {
                        question_number: number,
                        question_type: nq.question.question_type.clone(),
                        student_answer: answer_for(answers, number).map(str::to_string),
                        correct_answer: None,
                        is_correct: None,
                        matched: vec![],
                        missed: vec![],
                    };
                }
                check_one(number, nq.question, slot_key, answers, strategy)
            })
            .collect(),
        _ => {
            let key_text = scalar_key_text(key);
            vec![check_one(nq.number, nq.question, &key_text, answers, strategy)]
        }
    };

    GradedQuestion {
        first_number: nq.number,
        results,
    }
}

/// A set/ordered key authored as an array is its joined token list.
fn scalar_key_text(key: &AnswerKey) -> String {
    match key {
        AnswerKey::Text(s) => s.clone(),
        AnswerKey::List(items) => items.join(","),
    }
}

fn check_one(
    number: u32,
    question: &Question,
    key: &str,
    answers: &AnswerMap,
    strategy: Strategy,
) -> QuestionResult {
    let raw = answer_for(answers, number);
    let submitted = raw.unwrap_or("");

    let check = if is_unanswered(submitted) {
        // Unanswered is incorrect without consulting the comparator.
        AnswerCheck::incorrect()
    } else {
        strategy.comparator().compare(key, submitted)
    };

    QuestionResult {
        question_number: number,
        question_type: question.question_type.clone(),
        student_answer: raw.map(str::to_string),
        correct_answer: Some(key.to_string()),
        is_correct: Some(check.correct),
        matched: check.matched,
        missed: check.missed,
    }
}
