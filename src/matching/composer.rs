//! Reply composition.

use crate::knowledge::{AnswerRecord, FallbackReplies};
use crate::matching::language::Language;
use crate::matching::matcher::{KeywordMatcher, Match};
use crate::matching::message::IncomingMessage;

/// Pick the reply text for `language`.
///
/// A matched record answers in the requested language when it has a reply
/// there and in the other language otherwise. With no match, or a record
/// with no reply at all, the "not understood" message is used.
pub fn compose_reply<'a>(
    language: Language,
    record: Option<&'a AnswerRecord>,
    fallback: &'a FallbackReplies,
) -> &'a str {
    let other = match language {
        Language::English => Language::Bengali,
        Language::Bengali => Language::English,
    };

    record
        .and_then(|r| r.reply(language).or_else(|| r.reply(other)))
        .unwrap_or_else(|| fallback.get(language))
}

/// Outcome of answering one message.
#[derive(Debug, Clone, Copy)]
pub struct Reply<'a> {
    pub text: &'a str,
    pub language: Language,
    pub matched: Option<Match<'a>>,
}

impl KeywordMatcher {
    /// Match `message` and compose the reply.
    pub fn reply(&self, message: &IncomingMessage) -> Reply<'_> {
        let matched = self.find_answer(message.text());
        let text = compose_reply(
            message.language(),
            matched.map(|m| m.record),
            self.table().fallback(),
        );
        Reply {
            text,
            language: message.language(),
            matched,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::academy_table;

    #[test]
    fn test_prefers_requested_language() {
        let record = AnswerRecord::new("t", &[], &[], "hello", "হ্যালো");
        let fallback = FallbackReplies::default();
        assert_eq!(compose_reply(Language::English, Some(&record), &fallback), "hello");
        assert_eq!(compose_reply(Language::Bengali, Some(&record), &fallback), "হ্যালো");
    }

    #[test]
    fn test_falls_back_to_other_language() {
        let fallback = FallbackReplies::default();
        let en_only = AnswerRecord::new("t", &[], &[], "hello", "");
        let bn_only = AnswerRecord::new("t", &[], &[], "", "হ্যালো");
        assert_eq!(compose_reply(Language::Bengali, Some(&en_only), &fallback), "hello");
        assert_eq!(compose_reply(Language::English, Some(&bn_only), &fallback), "হ্যালো");
    }

    #[test]
    fn test_no_match_uses_not_understood() {
        let fallback = FallbackReplies::default();
        assert_eq!(compose_reply(Language::English, None, &fallback), fallback.en);
        assert_eq!(compose_reply(Language::Bengali, None, &fallback), fallback.bn);
    }

    #[test]
    fn test_record_without_replies_is_never_empty() {
        let fallback = FallbackReplies::default();
        let mute = AnswerRecord::new("t", &["x"], &[], "", "");
        assert_eq!(compose_reply(Language::English, Some(&mute), &fallback), fallback.en);
    }

    #[test]
    fn test_reply_end_to_end() {
        let matcher = KeywordMatcher::new(academy_table());

        let msg = IncomingMessage::new("কোর্স ফি কত").unwrap();
        let reply = matcher.reply(&msg);
        assert_eq!(reply.language, Language::Bengali);
        assert!(reply.text.contains("কোর্স ফি ভিন্ন হতে পারে"));

        let msg = IncomingMessage::new("xyzzy plugh").unwrap();
        let reply = matcher.reply(&msg);
        assert!(reply.matched.is_none());
        assert_eq!(reply.text, "🙂 Sorry, I didn't understand. Could you rephrase?");
    }
}
