//! Script-based language detection.
//!
//! Classification is binary: a message containing any character from the
//! Bengali Unicode block is Bengali, everything else is English. Mixed-script
//! messages are therefore Bengali as a whole.

use std::fmt;

use serde::Serialize;

/// First code point of the Bengali block.
const BENGALI_START: char = '\u{0980}';
/// Last code point of the Bengali block.
const BENGALI_END: char = '\u{09FF}';

/// The two reply locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Primary locale (Latin script).
    English,
    /// Secondary locale (Bengali script).
    Bengali,
}

impl Language {
    /// Classify `text` by script.
    pub fn detect(text: &str) -> Self {
        if contains_bengali(text) {
            Language::Bengali
        } else {
            Language::English
        }
    }

    /// Stable label for logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Bengali => "bn",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns true if `c` lies in the Bengali block (U+0980..=U+09FF).
pub fn is_bengali(c: char) -> bool {
    (BENGALI_START..=BENGALI_END).contains(&c)
}

/// Returns true if any character of `text` is Bengali.
pub fn contains_bengali(text: &str) -> bool {
    text.chars().any(is_bengali)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_bengali() {
        assert!(contains_bengali("কোর্স ফি কত"));
        assert!(!contains_bengali("what is the course fee"));
        assert!(!contains_bengali(""));
    }

    #[test]
    fn test_single_bengali_char_wins() {
        // One Bengali character classifies the whole message.
        assert_eq!(Language::detect("course fee কত"), Language::Bengali);
        assert_eq!(Language::detect("course fee"), Language::English);
    }

    #[test]
    fn test_block_bounds() {
        assert!(is_bengali('\u{0980}'));
        assert!(is_bengali('\u{09FF}'));
        assert!(!is_bengali('\u{097F}'));
        assert!(!is_bengali('\u{0A00}'));
    }
}
