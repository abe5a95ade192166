//! Pure helpers that canonicalize raw answer text before comparison.
//! Every function is total: malformed input normalizes to something that
//! simply fails to match, it never errors.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Canonical form for free-text answers: trimmed, case-folded, internal
/// whitespace runs collapsed to single spaces.
pub fn fold(raw: &str) -> String {
    WHITESPACE_RUN
        .replace_all(raw.trim(), " ")
        .to_lowercase()
}

/// Canonical form for enumerated tokens (choice letters, TRUE/FALSE/NOT
/// GIVEN): trim and case-fold only.
pub fn fold_token(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Accepted variants of a free-text key: `|`-separated, each folded
/// independently. Blank variants are dropped.
pub fn split_variants(key: &str) -> Vec<String> {
    key.split('|')
        .map(fold)
        .filter(|variant| !variant.is_empty())
        .collect()
}

/// Positional slots of a comma-delimited value, each folded. Empty slots
/// are preserved so a missing position still occupies its slot.
pub fn split_slots(raw: &str) -> Vec<String> {
    raw.split(',').map(fold_token).collect()
}

/// Unordered selection: comma-delimited tokens as a set. Duplicates
/// collapse and blank tokens are dropped.
pub fn split_selection(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(fold_token)
        .filter(|token| !token.is_empty())
        .collect()
}

/// An empty or whitespace-only value counts as unanswered.
pub fn is_unanswered(raw: &str) -> bool {
    raw.trim().is_empty()
}
