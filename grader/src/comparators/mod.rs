//! # Comparators
//!
//! A collection of comparison strategies for grading student answers.
//! Each comparator implements the logic for one question-type family and
//! adheres to the `AnswerComparator` trait, so strategies are
//! interchangeable and new families plug in without touching the
//! aggregator.
//!
//! The available comparators are:
//! - [`free_text_comparator`]: membership in a `|`-separated set of
//!   accepted spellings.
//! - [`single_choice_comparator`]: exact token equality after folding.
//! - [`multi_select_comparator`]: exact set equality over comma-separated
//!   selections.
//! - [`ordered_comparator`]: positional slot equality over comma-separated
//!   lists.

pub mod free_text_comparator;
pub mod multi_select_comparator;
pub mod ordered_comparator;
pub mod single_choice_comparator;
