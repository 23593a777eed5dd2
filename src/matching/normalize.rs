//! Text normalization shared by messages and keywords.
//!
//! Lowercase, replace anything that is not a letter, number or whitespace with
//! a space, collapse whitespace runs, trim. Messages and keywords go through
//! the same function so substring comparisons line up.

use std::sync::LazyLock;

use regex::Regex;

/// Anything outside Unicode letters (`L*`), numbers (`N*`) and whitespace.
///
/// Combining marks are not letters, so Bengali vowel signs and the virama
/// become spaces here, in messages and keywords alike.
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}\s]").expect("static normalization pattern"));

/// Normalize `text` for keyword comparison.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let replaced = NON_WORD.replace_all(&lowered, " ");

    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whitespace-delimited tokens of an already normalized string.
pub fn tokens(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split(' ').filter(|t| !t.is_empty())
}
