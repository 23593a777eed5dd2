//! Answer knowledge base.
//!
//! # Data Flow
//! ```text
//! startup:
//!     knowledge.table_path set?
//!         yes → table.rs (read TOML, validate)
//!         no  → builtin.rs (academy table)
//!     → AnswerTable (immutable, ordered)
//!     → compiled into KeywordMatcher, shared via Arc
//! ```

pub mod builtin;
pub mod record;
pub mod table;

use std::path::Path;

pub use builtin::academy_table;
pub use record::{AnswerRecord, FallbackReplies};
pub use table::{AnswerTable, TableError, TableIssue};

/// Load the table at `path`, or the built-in table when no path is given.
pub fn load_table(path: Option<&Path>) -> Result<AnswerTable, TableError> {
    match path {
        Some(path) => AnswerTable::load(path),
        None => {
            let table = academy_table();
            tracing::info!(records = table.len(), "Using built-in answer table");
            Ok(table)
        }
    }
}
