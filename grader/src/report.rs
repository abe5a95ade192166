//! # Grade Report Module
//!
//! The serializable grading result returned to the submission handler and
//! consumed by review and feedback UIs.
//!
//! The top-level fields `submissionId`, `testId`, `correct`, `total`,
//! `scorePercentage` and `band` are the persistence fields the admin and
//! feedback read paths depend on; their spellings are stable. The full
//! per-question breakdown rides alongside in `results`/`summary`.
//!
//! [`GradeReportResponse`] wraps a report in the `success`/`message`/`data`
//! envelope used for API responses.

use crate::traits::feedback::FeedbackEntry;
use crate::types::{Diagnostic, QuestionResult, ScoreSummary};
use serde::Serialize;

/// The final report for one graded submission.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeReport {
    pub submission_id: String,
    pub test_id: String,
    /// Raw number of correct scoring units.
    pub correct: u32,
    /// Total gradable scoring units.
    pub total: u32,
    /// Rounded percentage (0-100).
    pub score_percentage: u32,
    /// Band score for band-scored formats.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band: Option<f64>,
    /// RFC 3339 timestamp of when grading ran.
    pub generated_at: String,
    pub summary: ScoreSummary,
    pub results: Vec<QuestionResult>,
    pub feedback: Vec<FeedbackEntry>,
    /// Content-authoring warnings recorded while grading degraded.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

/// The API response envelope for grading results.
#[derive(Debug, Serialize)]
pub struct GradeReportResponse {
    success: bool,
    message: String,
    data: GradeReport,
}

impl From<GradeReport> for GradeReportResponse {
    fn from(report: GradeReport) -> Self {
        GradeReportResponse {
            success: true,
            message: "Grading complete.".to_string(),
            data: report,
        }
    }
}
