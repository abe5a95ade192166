use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw submitted answers keyed by global question number. Keys follow the
/// student UI's `q_<n>` convention, though bare `<n>` strings are accepted
/// on lookup as well.
pub type AnswerMap = HashMap<String, String>;

/// One student submission as handed to the engine by the submission
/// handler. The engine holds no reference to it after grading returns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Submission {
    pub id: String,
    #[serde(alias = "testId")]
    pub test_id: String,
    #[serde(default)]
    pub answers: AnswerMap,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    pub fn new(id: impl Into<String>, test_id: impl Into<String>, answers: AnswerMap) -> Self {
        Self {
            id: id.into(),
            test_id: test_id.into(),
            answers,
            submitted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_serde_round_trip() {
        let mut answers = AnswerMap::new();
        answers.insert("q_1".to_string(), "A".to_string());

        let submission = Submission::new("sub-1", "reading-1", answers);
        let json = serde_json::to_string(&submission).unwrap();
        let back: Submission = serde_json::from_str(&json).unwrap();
        assert_eq!(back, submission);
    }

    #[test]
    fn submission_accepts_camel_case_test_id() {
        let json = r#"{
            "id": "sub-2",
            "testId": "listening-3",
            "answers": {"q_1": "b"},
            "submitted_at": "2026-03-01T10:00:00Z"
        }"#;
        let submission: Submission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.test_id, "listening-3");
        assert_eq!(submission.answers.get("q_1").map(String::as_str), Some("b"));
    }
}
