//! Global question numbering.
//!
//! A question's global number is its 1-based position in the full
//! depth-first traversal of a test's passage → section → question tree.
//! The numbering is the only stable join key between a question and a
//! student's answer, so it must be deterministic: the same test always
//! yields the same numbers. Both the aggregator and the submission
//! validator build on [`walk`], which guarantees they agree.

use crate::registry::{self, Resolution};
use util::submission::AnswerMap;
use util::test_definition::{AnswerKey, Question, Test};

/// One question positioned in the global numbering.
#[derive(Debug, Clone, Copy)]
pub struct NumberedQuestion<'a> {
    /// First global number the question occupies.
    pub number: u32,
    /// How many consecutive numbers it consumes (one per blank).
    pub span: u32,
    pub question: &'a Question,
}

/// Depth-first traversal with 1-based global numbering. Within a passage,
/// ungrouped questions come before the passage's sections.
pub fn walk(test: &Test) -> Vec<NumberedQuestion<'_>> {
    let mut numbered = Vec::new();
    let mut next = 1u32;

    for passage in &test.passages {
        for question in &passage.questions {
            push(&mut numbered, &mut next, question);
        }
        for section in &passage.sections {
            for question in &section.questions {
                push(&mut numbered, &mut next, question);
            }
        }
    }

    numbered
}

fn push<'a>(numbered: &mut Vec<NumberedQuestion<'a>>, next: &mut u32, question: &'a Question) {
    let span = question_span(question);
    numbered.push(NumberedQuestion {
        number: *next,
        span,
        question,
    });
    *next += span;
}

/// Numbers consumed by one question: an array key on an expanding type
/// takes one number per element, everything else takes one.
pub fn question_span(question: &Question) -> u32 {
    let expands = match registry::resolve(&question.question_type) {
        Resolution::Auto(strategy) => strategy.expands_array_keys(),
        _ => false,
    };
    match (&question.correct_answer, expands) {
        (Some(AnswerKey::List(slots)), true) => slots.len().max(1) as u32,
        _ => 1,
    }
}

/// Fetch a student's raw value by global number, accepting both the
/// `q_<n>` convention and a bare number string.
pub fn answer_for(answers: &AnswerMap, number: u32) -> Option<&str> {
    answers
        .get(&format!("q_{number}"))
        .or_else(|| answers.get(&number.to_string()))
        .map(String::as_str)
}
