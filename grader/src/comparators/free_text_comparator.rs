//! A comparator for free-text answers, where the key may list several
//! accepted spellings separated by `|`.
//!
//! Both sides are folded (trimmed, case-folded, whitespace-collapsed)
//! before comparison, so `"Willow  Tree"` matches the key
//! `"willow|willow tree"`.

use crate::traits::comparator::{AnswerCheck, AnswerComparator};
use crate::utilities::text_normalization::{fold, is_unanswered, split_variants};

/// Grades a free-text answer as correct when its folded form is a member
/// of the key's accepted-variant set.
///
/// A key with no usable variants can never match; the first variant is
/// reported as the missed expectation so feedback can show the primary
/// accepted spelling.
pub struct FreeTextComparator;

impl AnswerComparator for FreeTextComparator {
    fn compare(&self, key: &str, submitted: &str) -> AnswerCheck {
        let variants = split_variants(key);
        if variants.is_empty() {
            return AnswerCheck::incorrect();
        }

        let folded = fold(submitted);
        if !is_unanswered(submitted) && variants.contains(&folded) {
            AnswerCheck {
                correct: true,
                matched: vec![folded],
                missed: vec![],
            }
        } else {
            AnswerCheck {
                correct: false,
                matched: vec![],
                missed: vec![variants[0].clone()],
            }
        }
    }
}
