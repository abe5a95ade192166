//! Manual feedback strategy: instructor-authored messages per global
//! question number, applied to incorrect answers, with a plain fallback
//! when no message was configured.

use crate::error::GraderError;
use crate::traits::feedback::{Feedback, FeedbackEntry};
use crate::types::QuestionResult;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct ManualFeedback {
    messages: HashMap<u32, String>,
}

impl ManualFeedback {
    pub fn new(messages: HashMap<u32, String>) -> Self {
        Self { messages }
    }
}

impl Feedback for ManualFeedback {
    fn assemble_feedback(
        &self,
        results: &[QuestionResult],
    ) -> Result<Vec<FeedbackEntry>, GraderError> {
        let mut entries = Vec::new();

        for result in results {
            let message = match result.is_correct {
                None => continue,
                Some(true) => "Correct".to_string(),
                Some(false) => self
                    .messages
                    .get(&result.question_number)
                    .cloned()
                    .unwrap_or_else(|| "Incorrect".to_string()),
            };
            entries.push(FeedbackEntry {
                question: result.question_number,
                message,
            });
        }

        Ok(entries)
    }
}
