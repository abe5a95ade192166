//! Submission pre-check: which global question numbers have no usable
//! entry in the answer map. The caller decides whether that blocks
//! submission or merely prompts the student; this module only reports.

use crate::numbering::{answer_for, walk};
use crate::utilities::text_normalization::is_unanswered;
use util::submission::AnswerMap;
use util::test_definition::Test;

/// Global question numbers with a missing or empty entry in the answer
/// map, in numbering order.
///
/// Shares [`walk`] with the aggregator, so the two cannot disagree about
/// which number a question owns. Per-blank questions are checked one
/// number per blank.
pub fn unanswered_questions(test: &Test, answers: &AnswerMap) -> Vec<u32> {
    let mut unanswered = Vec::new();

    for nq in walk(test) {
        for offset in 0..nq.span {
            let number = nq.number + offset;
            match answer_for(answers, number) {
                Some(raw) if !is_unanswered(raw) => {}
                _ => unanswered.push(number),
            }
        }
    }

    unanswered
}
