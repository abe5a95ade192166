use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

/// Root content unit: an ordered sequence of passages (or listening parts,
/// which are structurally identical for grading purposes).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Test {
    pub id: String,
    pub format: TestFormat,
    #[serde(default)]
    pub title: Option<String>,
    pub passages: Vec<Passage>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TestFormat {
    Reading,
    Listening,
    Cambridge,
}

/// An ordered container of questions, optionally grouped into sections.
/// Document order within a passage is: ungrouped questions first, then
/// sections in order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Passage {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Section {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// One authored question. The authoring UI speaks camelCase, so the wire
/// spellings are accepted as aliases.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Question {
    #[serde(alias = "questionType")]
    pub question_type: QuestionType,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default, alias = "correctAnswer")]
    pub correct_answer: Option<AnswerKey>,
}

/// The authored answer key: a plain string (possibly `|`- or
/// comma-delimited) or an array of per-blank strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AnswerKey {
    Text(String),
    List(Vec<String>),
}

impl AnswerKey {
    /// True when the key carries no usable content at all. A gradable
    /// question with an empty key is a data-authoring error, not a scoring
    /// error.
    pub fn is_empty(&self) -> bool {
        match self {
            AnswerKey::Text(s) => s.trim().is_empty(),
            AnswerKey::List(items) => items.iter().all(|s| s.trim().is_empty()),
        }
    }

    /// Number of per-blank slots this key describes (1 for a plain string).
    pub fn slot_count(&self) -> usize {
        match self {
            AnswerKey::Text(_) => 1,
            AnswerKey::List(items) => items.len().max(1),
        }
    }
}

/// Closed union over every question-type tag the authoring tools emit.
///
/// Deserialization is total: an unrecognized tag lands in
/// [`QuestionType::Other`] and round-trips unchanged, so the registry,
/// not serde, decides whether a question is gradable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum QuestionType {
    MultipleChoice,
    MultiSelect,
    FillInTheBlanks,
    Matching,
    TrueFalseNotGiven,
    YesNoNotGiven,
    ParagraphMatching,
    MatchingHeadings,
    SentenceCompletion,
    ShortAnswer,
    ClozeTest,
    ParagraphFillBlanks,
    Fill,
    Radio,
    Abc,
    Abcd,
    Checkbox,
    Combobox,
    DragdropText,
    DragdropImage,
    MapLabeling,
    Flowchart,
    SignMessage,
    PeopleMatching,
    LongTextMc,
    ClozeMc,
    WordForm,
    ShortMessage,
    Other(String),
}

impl QuestionType {
    /// The canonical wire tag. [`QuestionType::Other`] echoes the original
    /// string it was parsed from.
    pub fn as_tag(&self) -> &str {
        match self {
            QuestionType::MultipleChoice => "multiple-choice",
            QuestionType::MultiSelect => "multi-select",
            QuestionType::FillInTheBlanks => "fill-in-the-blanks",
            QuestionType::Matching => "matching",
            QuestionType::TrueFalseNotGiven => "true-false-not-given",
            QuestionType::YesNoNotGiven => "yes-no-not-given",
            QuestionType::ParagraphMatching => "paragraph-matching",
            QuestionType::MatchingHeadings => "ielts-matching-headings",
            QuestionType::SentenceCompletion => "sentence-completion",
            QuestionType::ShortAnswer => "short-answer",
            QuestionType::ClozeTest => "cloze-test",
            QuestionType::ParagraphFillBlanks => "paragraph-fill-blanks",
            QuestionType::Fill => "fill",
            QuestionType::Radio => "radio",
            QuestionType::Abc => "abc",
            QuestionType::Abcd => "abcd",
            QuestionType::Checkbox => "checkbox",
            QuestionType::Combobox => "combobox",
            QuestionType::DragdropText => "dragdrop-text",
            QuestionType::DragdropImage => "dragdrop-image",
            QuestionType::MapLabeling => "map-labeling",
            QuestionType::Flowchart => "flowchart",
            QuestionType::SignMessage => "sign-message",
            QuestionType::PeopleMatching => "people-matching",
            QuestionType::LongTextMc => "long-text-mc",
            QuestionType::ClozeMc => "cloze-mc",
            QuestionType::WordForm => "word-form",
            QuestionType::ShortMessage => "short-message",
            QuestionType::Other(tag) => tag,
        }
    }

    /// Parse a known tag, or `None` for a spelling the union has never
    /// seen.
    fn from_tag(tag: &str) -> Option<QuestionType> {
        let parsed = match tag {
            "multiple-choice" => QuestionType::MultipleChoice,
            "multi-select" => QuestionType::MultiSelect,
            "fill-in-the-blanks" => QuestionType::FillInTheBlanks,
            "matching" => QuestionType::Matching,
            "true-false-not-given" => QuestionType::TrueFalseNotGiven,
            "yes-no-not-given" => QuestionType::YesNoNotGiven,
            "paragraph-matching" => QuestionType::ParagraphMatching,
            "ielts-matching-headings" => QuestionType::MatchingHeadings,
            "sentence-completion" => QuestionType::SentenceCompletion,
            "short-answer" => QuestionType::ShortAnswer,
            "cloze-test" => QuestionType::ClozeTest,
            "paragraph-fill-blanks" => QuestionType::ParagraphFillBlanks,
            "fill" => QuestionType::Fill,
            "radio" => QuestionType::Radio,
            "abc" => QuestionType::Abc,
            "abcd" => QuestionType::Abcd,
            "checkbox" => QuestionType::Checkbox,
            "combobox" => QuestionType::Combobox,
            "dragdrop-text" => QuestionType::DragdropText,
            "dragdrop-image" => QuestionType::DragdropImage,
            "map-labeling" => QuestionType::MapLabeling,
            "flowchart" => QuestionType::Flowchart,
            "sign-message" => QuestionType::SignMessage,
            "people-matching" => QuestionType::PeopleMatching,
            "long-text-mc" => QuestionType::LongTextMc,
            "cloze-mc" => QuestionType::ClozeMc,
            "word-form" => QuestionType::WordForm,
            "short-message" => QuestionType::ShortMessage,
            _ => return None,
        };
        Some(parsed)
    }
}

impl From<String> for QuestionType {
    fn from(tag: String) -> Self {
        QuestionType::from_tag(tag.trim()).unwrap_or(QuestionType::Other(tag))
    }
}

impl From<QuestionType> for String {
    fn from(question_type: QuestionType) -> Self {
        question_type.as_tag().to_string()
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Read a test definition from JSON on disk.
pub fn load_test(path: &Path) -> Result<Test, String> {
    use std::io::ErrorKind;

    let s = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            let msg = match e.kind() {
                ErrorKind::NotFound => "File not found".to_string(),
                ErrorKind::PermissionDenied => {
                    "Permission denied reading test definition".to_string()
                }
                ErrorKind::InvalidData => "Test definition file is not valid UTF-8".to_string(),
                _ => format!("Failed to read test definition ({})", e.kind()),
            };
            return Err(msg);
        }
    };

    serde_json::from_str::<Test>(&s).map_err(|_| "Invalid test definition JSON".to_string())
}

/// Save a test definition as JSON (atomic-ish write).
pub fn save_test(path: &Path, test: &Test) -> Result<(), String> {
    use std::io::ErrorKind;

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| match e.kind() {
            ErrorKind::PermissionDenied => {
                "Permission denied creating test definition directory".to_string()
            }
            _ => "Failed to prepare test definition directory".to_string(),
        })?;
    }

    let pretty = serde_json::to_string_pretty(test)
        .map_err(|_| "Failed to serialize test definition".to_string())?;

    let tmp = temp_path(path);
    {
        let mut f = fs::File::create(&tmp).map_err(|e| match e.kind() {
            ErrorKind::PermissionDenied => "Permission denied creating temp file".to_string(),
            _ => "Failed to create temp file".to_string(),
        })?;
        f.write_all(pretty.as_bytes())
            .map_err(|_| "Failed to write temp file".to_string())?;
        f.flush()
            .map_err(|_| "Failed to flush temp file".to_string())?;
    }
    fs::rename(&tmp, path).map_err(|_| "Failed to move temp file into place".to_string())?;
    Ok(())
}

fn temp_path(final_path: &Path) -> PathBuf {
    let mut tmp = final_path.to_path_buf();
    let fname = final_path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("test.json");
    tmp.set_file_name(format!("{fname}.tmp"));
    tmp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_type_tag_round_trip() {
        let tags = [
            "multiple-choice",
            "multi-select",
            "fill-in-the-blanks",
            "matching",
            "true-false-not-given",
            "yes-no-not-given",
            "paragraph-matching",
            "ielts-matching-headings",
            "sentence-completion",
            "short-answer",
            "cloze-test",
            "paragraph-fill-blanks",
            "fill",
            "radio",
            "abc",
            "abcd",
            "checkbox",
            "combobox",
            "dragdrop-text",
            "dragdrop-image",
            "map-labeling",
            "flowchart",
            "sign-message",
            "people-matching",
            "long-text-mc",
            "cloze-mc",
            "word-form",
            "short-message",
        ];
        for tag in tags {
            let parsed = QuestionType::from(tag.to_string());
            assert!(!matches!(parsed, QuestionType::Other(_)), "tag {tag} not recognized");
            assert_eq!(parsed.as_tag(), tag);
        }
    }

    #[test]
    fn unknown_tag_round_trips_through_other() {
        let parsed = QuestionType::from("essay-v2".to_string());
        assert_eq!(parsed, QuestionType::Other("essay-v2".to_string()));
        assert_eq!(parsed.as_tag(), "essay-v2");
    }

    #[test]
    fn question_accepts_camel_case_aliases() {
        let json = r#"{"questionType": "multiple-choice", "correctAnswer": "A"}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.question_type, QuestionType::MultipleChoice);
        assert_eq!(q.correct_answer, Some(AnswerKey::Text("A".to_string())));
    }

    #[test]
    fn answer_key_untagged_forms() {
        let text: AnswerKey = serde_json::from_str(r#""paris|Paris""#).unwrap();
        assert_eq!(text, AnswerKey::Text("paris|Paris".to_string()));

        let list: AnswerKey = serde_json::from_str(r#"["willow", "stream"]"#).unwrap();
        assert_eq!(
            list,
            AnswerKey::List(vec!["willow".to_string(), "stream".to_string()])
        );
        assert_eq!(list.slot_count(), 2);
    }

    #[test]
    fn empty_keys_detected() {
        assert!(AnswerKey::Text("   ".to_string()).is_empty());
        assert!(AnswerKey::List(vec![String::new(), " ".to_string()]).is_empty());
        assert!(!AnswerKey::List(vec![String::new(), "b".to_string()]).is_empty());
    }

    #[test]
    fn test_definition_save_load_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("reading-1.json");

        let test = Test {
            id: "reading-1".to_string(),
            format: TestFormat::Reading,
            title: Some("Sample".to_string()),
            passages: vec![Passage {
                name: Some("Passage 1".to_string()),
                questions: vec![Question {
                    question_type: QuestionType::MultipleChoice,
                    prompt: Some("Pick one".to_string()),
                    options: vec!["A".to_string(), "B".to_string()],
                    correct_answer: Some(AnswerKey::Text("A".to_string())),
                }],
                sections: vec![],
            }],
        };

        save_test(&path, &test).unwrap();
        let loaded = load_test(&path).unwrap();
        assert_eq!(loaded, test);
    }

    #[test]
    fn load_missing_file_is_descriptive() {
        let err = load_test(Path::new("/nonexistent/test.json")).unwrap_err();
        assert_eq!(err, "File not found");
    }
}
