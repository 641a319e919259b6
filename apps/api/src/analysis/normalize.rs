//! Text normalization shared by the vectorizer and the keyword differ.

use once_cell::sync::Lazy;
use regex::Regex;

/// Any run of characters outside letters, digits and underscore.
/// Combining marks, joiners and connector punctuation other than `_` all count as separators.
static NON_WORD_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}_]+").expect("non-word pattern is a valid regex"));

/// Lowercases `text` and collapses every run of non-word characters into a single space.
///
/// Empty input yields an empty string. Input made only of punctuation yields `" "`,
/// which carries no tokens.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    NON_WORD_RUN.replace_all(&lowered, " ").into_owned()
}

/// Splits normalized text into tokens. Empty tokens never appear.
pub fn tokens(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split_whitespace()
}
