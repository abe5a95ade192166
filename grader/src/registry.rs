//! # Question Type Registry
//!
//! Single source of truth mapping a question type to its comparison
//! strategy. The aggregator and validator both dispatch through
//! [`resolve`]; adding a question type means adding one arm to the match
//! here, and nothing else.
//!
//! The match is exhaustive over the closed [`QuestionType`] union: a new
//! variant cannot be added without choosing its family, which is checked
//! at compile time. Only tags that arrive as [`QuestionType::Other`]
//! (a spelling the model has never seen) resolve to
//! [`Resolution::Unknown`], and those degrade to ungradable instead of
//! erroring in the caller's path.

use crate::comparators::free_text_comparator::FreeTextComparator;
use crate::comparators::multi_select_comparator::MultiSelectComparator;
use crate::comparators::ordered_comparator::OrderedComparator;
use crate::comparators::single_choice_comparator::SingleChoiceComparator;
use crate::traits::comparator::AnswerComparator;
use util::test_definition::QuestionType;

/// Comparison family a question type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFamily {
    SingleChoice,
    MultiSelect,
    FreeText,
    Ordered,
}

/// Strategy resolved for a gradable question type.
#[derive(Debug, Clone, Copy)]
pub struct Strategy {
    pub family: TypeFamily,
    /// True when the type's key is an array of independent blanks, each
    /// consuming its own global number.
    pub per_blank: bool,
}

impl Strategy {
    pub fn comparator(&self) -> &'static dyn AnswerComparator {
        match self.family {
            TypeFamily::SingleChoice => &SingleChoiceComparator,
            TypeFamily::MultiSelect => &MultiSelectComparator,
            TypeFamily::FreeText => &FreeTextComparator,
            TypeFamily::Ordered => &OrderedComparator,
        }
    }

    /// Whether an array-shaped key grades element-wise, one global number
    /// per element. Always true for per-blank types; also true for scalar
    /// free-text and single-choice questions authored with an array key,
    /// which grade the same way rather than failing.
    pub fn expands_array_keys(&self) -> bool {
        self.per_blank
            || matches!(
                self.family,
                TypeFamily::FreeText | TypeFamily::SingleChoice
            )
    }
}

/// How a question type participates in grading.
pub enum Resolution {
    /// Gradable by an automatic comparison strategy.
    Auto(Strategy),
    /// Graded by a human elsewhere (writing tasks); excluded from scoring
    /// but still present in results.
    Manual,
    /// Tag not known to the registry; excluded from scoring and recorded
    /// in diagnostics.
    Unknown(String),
}

/// Resolve a question type to its comparison strategy.
pub fn resolve(question_type: &QuestionType) -> Resolution {
    use QuestionType::*;

    let (family, per_blank) = match question_type {
        MultipleChoice | TrueFalseNotGiven | YesNoNotGiven | ParagraphMatching | Radio | Abc
        | Abcd | SignMessage | LongTextMc => (TypeFamily::SingleChoice, false),
        MultiSelect | Checkbox => (TypeFamily::MultiSelect, false),
        FillInTheBlanks | SentenceCompletion | ShortAnswer | Fill | WordForm => {
            (TypeFamily::FreeText, false)
        }
        Matching | MatchingHeadings | Combobox | DragdropText | DragdropImage
        | PeopleMatching => (TypeFamily::Ordered, false),
        ClozeTest | ParagraphFillBlanks | Flowchart | MapLabeling => (TypeFamily::FreeText, true),
        ClozeMc => (TypeFamily::SingleChoice, true),
        ShortMessage => return Resolution::Manual,
        Other(tag) => return Resolution::Unknown(tag.clone()),
    };

    Resolution::Auto(Strategy { family, per_blank })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family_of(tag: &str) -> (TypeFamily, bool) {
        match resolve(&QuestionType::from(tag.to_string())) {
            Resolution::Auto(strategy) => (strategy.family, strategy.per_blank),
            _ => panic!("expected {tag} to be gradable"),
        }
    }

    #[test]
    fn single_choice_tags() {
        for tag in [
            "multiple-choice",
            "true-false-not-given",
            "yes-no-not-given",
            "paragraph-matching",
            "radio",
            "abc",
            "abcd",
            "sign-message",
            "long-text-mc",
        ] {
            assert_eq!(family_of(tag), (TypeFamily::SingleChoice, false), "{tag}");
        }
    }

    #[test]
    fn multi_select_tags() {
        for tag in ["multi-select", "checkbox"] {
            assert_eq!(family_of(tag), (TypeFamily::MultiSelect, false), "{tag}");
        }
    }

    #[test]
    fn free_text_tags() {
        for tag in [
            "fill-in-the-blanks",
            "sentence-completion",
            "short-answer",
            "fill",
            "word-form",
        ] {
            assert_eq!(family_of(tag), (TypeFamily::FreeText, false), "{tag}");
        }
    }

    #[test]
    fn ordered_tags() {
        for tag in [
            "matching",
            "ielts-matching-headings",
            "combobox",
            "dragdrop-text",
            "dragdrop-image",
            "people-matching",
        ] {
            assert_eq!(family_of(tag), (TypeFamily::Ordered, false), "{tag}");
        }
    }

    #[test]
    fn per_blank_tags() {
        for tag in [
            "cloze-test",
            "paragraph-fill-blanks",
            "flowchart",
            "map-labeling",
        ] {
            assert_eq!(family_of(tag), (TypeFamily::FreeText, true), "{tag}");
        }
        assert_eq!(family_of("cloze-mc"), (TypeFamily::SingleChoice, true));
    }

    #[test]
    fn writing_is_manual() {
        assert!(matches!(
            resolve(&QuestionType::ShortMessage),
            Resolution::Manual
        ));
    }

    #[test]
    fn unrecognized_tag_is_unknown() {
        match resolve(&QuestionType::from("essay-v2".to_string())) {
            Resolution::Unknown(tag) => assert_eq!(tag, "essay-v2"),
            _ => panic!("expected unknown resolution"),
        }
    }

    #[test]
    fn ordered_and_multi_select_do_not_expand_array_keys() {
        let ordered = Strategy {
            family: TypeFamily::Ordered,
            per_blank: false,
        };
        let multi = Strategy {
            family: TypeFamily::MultiSelect,
            per_blank: false,
        };
        assert!(!ordered.expands_array_keys());
        assert!(!multi.expands_array_keys());
    }
}
