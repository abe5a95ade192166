//! A comparator for ordered multi-value answers (matching, heading
//! assignment, drag-and-drop), where **slot position matters**.
//!
//! Both sides are comma-delimited lists; slot *i* of the submission is
//! compared only against slot *i* of the key. A single mismatched, missing
//! or extra slot fails the question; there is no partial credit at this
//! level.

use crate::traits::comparator::{AnswerCheck, AnswerComparator};
use crate::utilities::text_normalization::split_slots;

/// Grades an ordered answer by positional slot equality over the folded
/// tokens of both sides.
pub struct OrderedComparator;

impl AnswerComparator for OrderedComparator {
    fn compare(&self, key: &str, submitted: &str) -> AnswerCheck {
        let expected = split_slots(key);
        let received = split_slots(submitted);

        let mut matched = Vec::new();
        let mut missed = Vec::new();

        for (i, want) in expected.iter().enumerate() {
            match received.get(i) {
                Some(got) if got == want && !want.is_empty() => matched.push(want.clone()),
                _ => missed.push(want.clone()),
            }
        }

        let usable = expected.iter().any(|slot| !slot.is_empty());
        AnswerCheck {
            correct: usable && missed.is_empty() && received.len() == expected.len(),
            matched,
            missed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_matters() {
        assert!(OrderedComparator.compare("2,1,3", "2,1,3").correct);
        assert!(!OrderedComparator.compare("2,1,3", "1,2,3").correct);
    }

    #[test]
    fn single_mismatched_slot_fails() {
        let check = OrderedComparator.compare("a,b,c", "a,x,c");
        assert!(!check.correct);
        assert_eq!(check.matched, vec!["a", "c"]);
        assert_eq!(check.missed, vec!["b"]);
    }

    #[test]
    fn missing_slot_fails() {
        let check = OrderedComparator.compare("a,b,c", "a,b");
        assert!(!check.correct);
        assert_eq!(check.missed, vec!["c"]);
    }

    #[test]
    fn extra_slot_fails() {
        assert!(!OrderedComparator.compare("a,b", "a,b,c").correct);
    }

    #[test]
    fn slots_fold_case_and_padding() {
        assert!(OrderedComparator.compare("II, IV, I", "ii,iv,i").correct);
    }

    #[test]
    fn empty_submission_is_incorrect() {
        let check = OrderedComparator.compare("a,b", "");
        assert!(!check.correct);
        assert_eq!(check.missed.len(), 2);
    }

    #[test]
    fn key_with_no_usable_slots_never_matches() {
        assert!(!OrderedComparator.compare(" , ", " , ").correct);
    }
}
