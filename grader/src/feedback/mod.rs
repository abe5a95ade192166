//! # Feedback Strategies Module
//!
//! Pluggable feedback strategies for the grading engine. Each strategy
//! implements the [`Feedback`](crate::traits::feedback::Feedback) trait
//! and produces a list of entries from the grading results.
//!
//! ## Available Strategies
//!
//! - [`auto_feedback`]: template-based feedback derived from the matched
//!   and missed tokens of each result.
//! - [`manual_feedback`]: instructor-authored messages per question
//!   number, with a template fallback.

pub mod auto_feedback;
pub mod manual_feedback;
