//! The ordered answer table and its loading.
//!
//! # Responsibilities
//! - Hold records in priority order
//! - Load a custom table from TOML
//! - Reject tables that could produce an empty reply
//!
//! # Design Decisions
//! - Built once at startup, shared read-only afterwards
//! - Validation returns every issue, not just the first
//! - Keywords are not checked; an empty keyword is simply never matched

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::knowledge::record::{AnswerRecord, FallbackReplies};

/// Errors raised while loading an answer table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read answer table: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse answer table: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid answer table: {}", join_issues(.0))]
    Invalid(Vec<TableIssue>),
}

/// A single semantic problem in a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableIssue {
    /// The table has no records at all.
    Empty,
    /// Record at this position has neither an English nor a Bengali reply.
    MissingReply { index: usize, topic: String },
    /// A "not understood" reply is blank.
    MissingFallback { language: &'static str },
}

impl fmt::Display for TableIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableIssue::Empty => write!(f, "table has no records"),
            TableIssue::MissingReply { index, topic } => {
                write!(f, "record #{} ({:?}) has no reply in any language", index, topic)
            }
            TableIssue::MissingFallback { language } => {
                write!(f, "fallback reply for '{}' is empty", language)
            }
        }
    }
}

fn join_issues(issues: &[TableIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Ordered, immutable set of answer records.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnswerTable {
    #[serde(default)]
    fallback: FallbackReplies,

    #[serde(default)]
    records: Vec<AnswerRecord>,
}

impl AnswerTable {
    pub fn from_parts(records: Vec<AnswerRecord>, fallback: FallbackReplies) -> Self {
        Self { fallback, records }
    }

    /// Parse and validate a table from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, TableError> {
        let table: AnswerTable = toml::from_str(content)?;
        table.validate().map_err(TableError::Invalid)?;
        Ok(table)
    }

    /// Read, parse and validate a table file.
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let content = fs::read_to_string(path)?;
        let table = Self::from_toml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            records = table.len(),
            "Answer table loaded"
        );
        Ok(table)
    }

    /// Records in priority order.
    pub fn records(&self) -> &[AnswerRecord] {
        &self.records
    }

    pub fn fallback(&self) -> &FallbackReplies {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Check the invariants every table must satisfy.
    pub fn validate(&self) -> Result<(), Vec<TableIssue>> {
        let mut issues = Vec::new();

        if self.records.is_empty() {
            issues.push(TableIssue::Empty);
        }

        for (index, record) in self.records.iter().enumerate() {
            if !record.has_reply() {
                issues.push(TableIssue::MissingReply {
                    index,
                    topic: record.topic.clone(),
                });
            }
        }

        if self.fallback.en.trim().is_empty() {
            issues.push(TableIssue::MissingFallback { language: "en" });
        }
        if self.fallback.bn.trim().is_empty() {
            issues.push(TableIssue::MissingFallback { language: "bn" });
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}
