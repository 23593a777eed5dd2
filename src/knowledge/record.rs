//! Answer records and the "not understood" replies.

use serde::{Deserialize, Serialize};

use crate::matching::Language;

/// One keyword-tagged question/answer pair.
///
/// Replies may be empty in one language; the composer falls back to the
/// other. Keyword lists may be empty, in which case the record is only
/// reachable through fallback scoring.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnswerRecord {
    /// Label for logs and tooling. Never used for matching.
    #[serde(default)]
    pub topic: String,

    /// English trigger phrases, in priority order.
    #[serde(default)]
    pub keywords_en: Vec<String>,

    /// Bengali trigger phrases, in priority order.
    #[serde(default)]
    pub keywords_bn: Vec<String>,

    #[serde(default)]
    pub reply_en: String,

    #[serde(default)]
    pub reply_bn: String,
}

impl AnswerRecord {
    /// Build a record from static data.
    pub fn new(
        topic: &str,
        keywords_en: &[&str],
        keywords_bn: &[&str],
        reply_en: &str,
        reply_bn: &str,
    ) -> Self {
        Self {
            topic: topic.to_string(),
            keywords_en: keywords_en.iter().map(|k| k.to_string()).collect(),
            keywords_bn: keywords_bn.iter().map(|k| k.to_string()).collect(),
            reply_en: reply_en.to_string(),
            reply_bn: reply_bn.to_string(),
        }
    }

    /// Keyword list consulted by exact matching for `language`.
    pub fn keywords(&self, language: Language) -> &[String] {
        match language {
            Language::English => &self.keywords_en,
            Language::Bengali => &self.keywords_bn,
        }
    }

    /// Reply in `language`, or `None` if that language's reply is empty.
    pub fn reply(&self, language: Language) -> Option<&str> {
        let reply = match language {
            Language::English => &self.reply_en,
            Language::Bengali => &self.reply_bn,
        };
        if reply.is_empty() {
            None
        } else {
            Some(reply)
        }
    }

    /// Returns true if at least one reply is non-empty.
    pub fn has_reply(&self) -> bool {
        !self.reply_en.is_empty() || !self.reply_bn.is_empty()
    }
}

/// Replies used when nothing matched.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FallbackReplies {
    pub en: String,
    pub bn: String,
}

impl FallbackReplies {
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::English => &self.en,
            Language::Bengali => &self.bn,
        }
    }
}

impl Default for FallbackReplies {
    fn default() -> Self {
        Self {
            en: "🙂 Sorry, I didn't understand. Could you rephrase?".to_string(),
            bn: "🙂 দুঃখিত, আমি সেটা বুঝতে পারিনি। একটু ভিন্নভাবে বলবেন?".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_empty_is_none() {
        let record = AnswerRecord::new("t", &["a"], &[], "hello", "");
        assert_eq!(record.reply(Language::English), Some("hello"));
        assert_eq!(record.reply(Language::Bengali), None);
        assert!(record.has_reply());
    }

    #[test]
    fn test_keywords_by_language() {
        let record = AnswerRecord::new("t", &["fee"], &["ফি"], "x", "y");
        assert_eq!(record.keywords(Language::English), ["fee".to_string()]);
        assert_eq!(record.keywords(Language::Bengali), ["ফি".to_string()]);
    }
}
