//! Builders for test definitions and answer maps, shared by unit and
//! integration tests across the workspace.

use crate::submission::AnswerMap;
use crate::test_definition::{AnswerKey, Passage, Question, QuestionType, Section, Test, TestFormat};

/// A question with a plain-string answer key.
pub fn question(tag: &str, key: &str) -> Question {
    Question {
        question_type: QuestionType::from(tag.to_string()),
        prompt: None,
        options: vec![],
        correct_answer: Some(AnswerKey::Text(key.to_string())),
    }
}

/// A question whose key is an array of per-blank answers.
pub fn blank_question(tag: &str, keys: &[&str]) -> Question {
    Question {
        question_type: QuestionType::from(tag.to_string()),
        prompt: None,
        options: vec![],
        correct_answer: Some(AnswerKey::List(keys.iter().map(|k| k.to_string()).collect())),
    }
}

/// A question missing its answer key entirely.
pub fn unkeyed_question(tag: &str) -> Question {
    Question {
        question_type: QuestionType::from(tag.to_string()),
        prompt: None,
        options: vec![],
        correct_answer: None,
    }
}

pub fn passage(questions: Vec<Question>) -> Passage {
    Passage {
        name: None,
        questions,
        sections: vec![],
    }
}

pub fn section(questions: Vec<Question>) -> Section {
    Section {
        name: None,
        questions,
    }
}

pub fn sectioned_passage(sections: Vec<Section>) -> Passage {
    Passage {
        name: None,
        questions: vec![],
        sections,
    }
}

pub fn test(format: TestFormat, passages: Vec<Passage>) -> Test {
    Test {
        id: "test-1".to_string(),
        format,
        title: None,
        passages,
    }
}

/// An answer map keyed by the `q_<n>` convention.
pub fn answers(entries: &[(u32, &str)]) -> AnswerMap {
    entries
        .iter()
        .map(|(n, value)| (format!("q_{n}"), value.to_string()))
        .collect()
}
