//!
//! # Feedback Trait
//!
//! Defines the [`Feedback`] trait and the [`FeedbackEntry`] struct used to
//! implement pluggable feedback strategies. Each strategy produces a list
//! of entries from the grading results, keyed by global question number.

use crate::error::GraderError;
use crate::types::QuestionResult;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackEntry {
    pub question: u32,
    pub message: String,
}

/// A trait for pluggable feedback strategies.
///
/// Implement this trait to define how feedback is generated from a set of
/// grading results (e.g., template-based or instructor-specified).
pub trait Feedback: Send + Sync {
    fn assemble_feedback(
        &self,
        results: &[QuestionResult],
    ) -> Result<Vec<FeedbackEntry>, GraderError>;
}
