//! Keyword-matching FAQ chatbot.
//!
//! Answers free-text chat messages from a static, ordered table of
//! keyword-tagged question/answer pairs in English and Bengali.

// Core
pub mod knowledge;
pub mod matching;

// Service
pub mod config;
pub mod http;
pub mod security;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::ChatbotConfig;
pub use http::HttpServer;
pub use knowledge::{AnswerRecord, AnswerTable};
pub use lifecycle::Shutdown;
pub use matching::{contains_bengali, IncomingMessage, KeywordMatcher};
