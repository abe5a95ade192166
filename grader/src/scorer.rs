//! # Scorer Module
//!
//! Folds per-question grading outcomes into a single [`ScoreSummary`]:
//! raw correct count, total gradable units, rounded percentage, and the
//! optional band conversion.

use crate::types::{GradedQuestion, ScoreSummary};
use util::grading_config::{BandTable, BlankScoring};

/// Compute the summary for one grading invocation.
///
/// Under [`BlankScoring::PerBlank`] every gradable number is one scoring
/// unit, so a 40-number test is scored out of 40 regardless of how its
/// blanks are grouped into questions. Under [`BlankScoring::AllOrNothing`]
/// each authored question is one unit and counts as correct only when
/// every one of its gradable numbers is.
///
/// `percentage` is `round(100 * correct / total)`. A test with no gradable
/// units yields 0, never a division by zero. The band is looked up from
/// the supplied table when one is in effect for the test's format.
pub fn compute_summary(
    graded: &[GradedQuestion],
    policy: BlankScoring,
    band_table: Option<&BandTable>,
) -> ScoreSummary {
    let (correct_count, total_gradable) = match policy {
        BlankScoring::PerBlank => graded.iter().fold((0, 0), |(correct, total), question| {
            (
                correct + question.correct_count(),
                total + question.gradable_count(),
            )
        }),
        BlankScoring::AllOrNothing => graded
            .iter()
            .filter(|question| question.gradable_count() > 0)
            .fold((0, 0), |(correct, total), question| {
                (correct + u32::from(question.all_correct()), total + 1)
            }),
    };

    let percentage = if total_gradable > 0 {
        ((correct_count as f64 / total_gradable as f64) * 100.0).round() as u32
    } else {
        0
    };

    ScoreSummary {
        correct_count,
        total_gradable,
        percentage,
        band: band_table.map(|table| table.band_for(correct_count)),
    }
}
