//! Configuration loading from disk and environment.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::ChatbotConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {var}: '{value}'")]
    Env { var: &'static str, value: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration from an optional TOML file plus process environment.
pub fn load_config(path: Option<&Path>) -> Result<ChatbotConfig, ConfigError> {
    load_config_with(path, |var| std::env::var(var).ok())
}

/// Load configuration, resolving environment variables through `env`.
///
/// Precedence: defaults < file < environment.
pub fn load_config_with<F>(path: Option<&Path>, env: F) -> Result<ChatbotConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => ChatbotConfig::default(),
    };

    apply_env_overrides(&mut config, env)?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply `PORT`, `BIND_ADDRESS`, `FRONTEND_SECRET` and `ANSWER_TABLE`.
///
/// `BIND_ADDRESS` wins over `PORT` when both are set.
fn apply_env_overrides<F>(config: &mut ChatbotConfig, env: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = env("PORT") {
        let port: u16 = port.trim().parse().map_err(|_| ConfigError::Env {
            var: "PORT",
            value: port.clone(),
        })?;
        config.listener.bind_address = format!("0.0.0.0:{}", port);
    }

    if let Some(addr) = env("BIND_ADDRESS") {
        config.listener.bind_address = addr;
    }

    if let Some(secret) = env("FRONTEND_SECRET") {
        config.auth.frontend_secret = Some(secret);
    }

    if let Some(path) = env("ANSWER_TABLE") {
        config.knowledge.table_path = Some(PathBuf::from(path));
    }

    Ok(())
}
