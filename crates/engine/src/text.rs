//! Text normalization helpers shared across the extractors.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Removes characters that are neither alphanumeric nor whitespace, then
/// collapses every whitespace run (including newlines) to a single space
/// and trims. Punctuation goes first so removed tokens cannot leave double
/// spaces behind; the result is idempotent.
///
/// Extractors that depend on line structure (name, title) operate on the
/// original text instead: line breaks are meaningful there.
pub fn normalize(text: &str) -> String {
    let stripped = NON_WORD.replace_all(text, "");
    WHITESPACE.replace_all(&stripped, " ").trim().to_string()
}

/// Removes non-word, non-whitespace characters but leaves spacing and case
/// alone.
pub(crate) fn strip_punctuation(text: &str) -> String {
    NON_WORD.replace_all(text, "").into_owned()
}

/// Python-style title casing: a letter following a non-alphabetic character
/// is uppercased, every other letter is lowercased.
pub(crate) fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_boundary = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_boundary {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_boundary = false;
        } else {
            out.push(c);
            at_boundary = true;
        }
    }
    out
}
