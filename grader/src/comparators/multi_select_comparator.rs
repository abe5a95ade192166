//! A comparator for multi-select answers, graded as **exact set equality**.
//!
//! Both the key and the submission are comma-delimited selections treated
//! as sets: order is irrelevant and duplicates collapse. The submission is
//! correct only when the two sets are equal in both directions: a missing
//! selection fails, and so does an extra one. A subset match is
//! deliberately not accepted.

use crate::traits::comparator::{AnswerCheck, AnswerComparator};
use crate::utilities::text_normalization::split_selection;

/// Grades a multi-select answer by exact set equality over the folded
/// tokens of both sides.
pub struct MultiSelectComparator;

impl AnswerComparator for MultiSelectComparator {
    fn compare(&self, key: &str, submitted: &str) -> AnswerCheck {
        let expected = split_selection(key);
        let received = split_selection(submitted);

        let matched: Vec<String> = expected.intersection(&received).cloned().collect();
        let missed: Vec<String> = expected.difference(&received).cloned().collect();
        let extra = received.difference(&expected).count();

        AnswerCheck {
            correct: !expected.is_empty() && missed.is_empty() && extra == 0,
            matched,
            missed,
        }
    }
}
