//! Message matching subsystem.
//!
//! # Data Flow
//! ```text
//! raw text
//!     → message.rs (trim, reject empty, detect language)
//!     → matcher.rs (exact pass, then fallback scoring)
//!     → composer.rs (pick reply language, "not understood" default)
//!     → reply text
//! ```
//!
//! Everything here is pure and synchronous. The compiled matcher is shared
//! read-only across requests.

pub mod composer;
pub mod language;
pub mod matcher;
pub mod message;
pub mod normalize;

pub use composer::{compose_reply, Reply};
pub use language::{contains_bengali, Language};
pub use matcher::{KeywordMatcher, Match, MatchKind};
pub use message::{EmptyMessage, IncomingMessage};
pub use normalize::normalize;
