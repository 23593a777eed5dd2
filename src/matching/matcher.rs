//! Keyword matching against the answer table.
//!
//! # Responsibilities
//! - Exact pass: first record whose keyword (in the message's language) is a
//!   substring of the normalized message
//! - Fallback pass: token-overlap scoring across both languages
//!
//! # Design Decisions
//! - Table order is the specificity ranking; first match wins
//! - Fallback ties keep the earliest record (strict `>`)
//! - A token counts once per keyword containing it, so short tokens can
//!   score against several keywords of the same record
//! - Keywords are normalized once at construction

use crate::knowledge::{AnswerRecord, AnswerTable};
use crate::matching::language::Language;
use crate::matching::normalize::{normalize, tokens};

/// Tokens shorter than this are ignored by fallback scoring.
const MIN_TOKEN_CHARS: usize = 2;

/// How a record was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind<'a> {
    /// A normalized keyword occurred verbatim in the message.
    Exact { keyword: &'a str },
    /// Best token-overlap score.
    Fallback { score: usize },
}

impl MatchKind<'_> {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::Exact { .. } => "exact",
            MatchKind::Fallback { .. } => "fallback",
        }
    }
}

/// A matched record with its table position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    pub record: &'a AnswerRecord,
    pub index: usize,
    pub kind: MatchKind<'a>,
}

/// Normalized keywords of one record, empties dropped.
#[derive(Debug)]
struct CompiledKeywords {
    en: Vec<String>,
    bn: Vec<String>,
}

impl CompiledKeywords {
    fn compile(record: &AnswerRecord) -> Self {
        Self {
            en: compile_list(record.keywords(Language::English)),
            bn: compile_list(record.keywords(Language::Bengali)),
        }
    }

    fn for_language(&self, language: Language) -> &[String] {
        match language {
            Language::English => &self.en,
            Language::Bengali => &self.bn,
        }
    }

    fn all(&self) -> impl Iterator<Item = &String> {
        self.en.iter().chain(self.bn.iter())
    }
}

fn compile_list(keywords: &[String]) -> Vec<String> {
    keywords
        .iter()
        .map(|k| normalize(k))
        .filter(|k| !k.is_empty())
        .collect()
}

/// Matcher over an immutable answer table.
#[derive(Debug)]
pub struct KeywordMatcher {
    table: AnswerTable,
    compiled: Vec<CompiledKeywords>,
}

impl KeywordMatcher {
    pub fn new(table: AnswerTable) -> Self {
        let compiled = table.records().iter().map(CompiledKeywords::compile).collect();
        Self { table, compiled }
    }

    pub fn table(&self) -> &AnswerTable {
        &self.table
    }

    /// Find the answer for a non-empty message.
    ///
    /// Runs the exact pass with the keyword list of the detected language,
    /// then the fallback pass if nothing matched.
    pub fn find_answer(&self, message: &str) -> Option<Match<'_>> {
        let language = Language::detect(message);
        let normalized = normalize(message);

        self.exact_match(&normalized, language)
            .or_else(|| self.fallback_match(&normalized))
    }

    fn exact_match(&self, normalized: &str, language: Language) -> Option<Match<'_>> {
        self.entries().find_map(|(index, record, keywords)| {
            keywords
                .for_language(language)
                .iter()
                .find(|keyword| normalized.contains(keyword.as_str()))
                .map(|keyword| Match {
                    record,
                    index,
                    kind: MatchKind::Exact {
                        keyword: keyword.as_str(),
                    },
                })
        })
    }

    fn fallback_match(&self, normalized: &str) -> Option<Match<'_>> {
        let words: Vec<&str> = tokens(normalized)
            .filter(|t| t.chars().count() >= MIN_TOKEN_CHARS)
            .collect();
        if words.is_empty() {
            return None;
        }

        let mut best: Option<Match<'_>> = None;
        let mut best_score = 0;

        for (index, record, keywords) in self.entries() {
            let score = keywords
                .all()
                .map(|keyword| words.iter().filter(|w| keyword.contains(**w)).count())
                .sum::<usize>();

            if score > best_score {
                best_score = score;
                best = Some(Match {
                    record,
                    index,
                    kind: MatchKind::Fallback { score },
                });
            }
        }

        best
    }

    fn entries(&self) -> impl Iterator<Item = (usize, &AnswerRecord, &CompiledKeywords)> {
        self.table
            .records()
            .iter()
            .zip(self.compiled.iter())
            .enumerate()
            .map(|(index, (record, keywords))| (index, record, keywords))
    }
}
