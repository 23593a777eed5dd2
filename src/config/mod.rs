//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! .env (dotenvy, loaded by main)
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, apply env overrides)
//!     → validation.rs (semantic checks)
//!     → ChatbotConfig (validated, immutable)
//!     → consumed once at startup by the HTTP server
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_config_with, ConfigError};
pub use schema::{
    AuthConfig, ChatbotConfig, CorsConfig, KnowledgeConfig, ListenerConfig, LogFormat,
    ObservabilityConfig, RateLimitConfig, SecurityConfig, ServiceConfig, TimeoutConfig,
};
pub use validation::{validate_config, ValidationError};
