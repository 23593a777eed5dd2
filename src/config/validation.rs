//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, limits > 0)
//! - Check addresses, origins and header names parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ChatbotConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use axum::http::{HeaderName, HeaderValue};
use thiserror::Error;

use crate::config::schema::ChatbotConfig;

/// A single semantic configuration problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: '{value}' is not a valid socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },

    #[error("cors.allowed_origins: '{0}' is not an http(s) origin")]
    InvalidOrigin(String),

    #[error("auth.header: '{0}' is not a valid header name")]
    InvalidHeader(String),

    #[error("auth.frontend_secret must not be empty when set")]
    EmptySecret,
}

/// Validate a parsed configuration.
pub fn validate_config(config: &ChatbotConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_address(
        &mut errors,
        "listener.bind_address",
        &config.listener.bind_address,
    );
    if config.observability.metrics_enabled {
        check_address(
            &mut errors,
            "observability.metrics_address",
            &config.observability.metrics_address,
        );
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::Zero {
            field: "timeouts.request_secs",
        });
    }

    if config.rate_limit.enabled {
        if config.rate_limit.max_requests == 0 {
            errors.push(ValidationError::Zero {
                field: "rate_limit.max_requests",
            });
        }
        if config.rate_limit.window_secs == 0 {
            errors.push(ValidationError::Zero {
                field: "rate_limit.window_secs",
            });
        }
    }

    if config.security.max_body_size == 0 {
        errors.push(ValidationError::Zero {
            field: "security.max_body_size",
        });
    }

    for origin in &config.cors.allowed_origins {
        let well_formed = (origin.starts_with("http://") || origin.starts_with("https://"))
            && !origin.ends_with('/')
            && HeaderValue::from_str(origin).is_ok();
        if !well_formed {
            errors.push(ValidationError::InvalidOrigin(origin.clone()));
        }
    }

    if HeaderName::from_bytes(config.auth.header.as_bytes()).is_err() {
        errors.push(ValidationError::InvalidHeader(config.auth.header.clone()));
    }

    if matches!(&config.auth.frontend_secret, Some(secret) if secret.is_empty()) {
        errors.push(ValidationError::EmptySecret);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&ChatbotConfig::default()), Ok(()));
    }

    #[test]
    fn test_reports_every_error() {
        let mut config = ChatbotConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.timeouts.request_secs = 0;
        config.rate_limit.max_requests = 0;
        config.cors.allowed_origins.push("example.com".into());
        config.auth.header = "bad header".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.contains(&ValidationError::InvalidOrigin("example.com".into())));
    }

    #[test]
    fn test_disabled_rate_limit_skips_checks() {
        let mut config = ChatbotConfig::default();
        config.rate_limit.enabled = false;
        config.rate_limit.window_secs = 0;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_trailing_slash_origin_rejected() {
        let mut config = ChatbotConfig::default();
        config.cors.allowed_origins = vec!["https://example.com/".into()];
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_empty_secret_rejected() {
        let mut config = ChatbotConfig::default();
        config.auth.frontend_secret = Some(String::new());
        assert_eq!(validate_config(&config), Err(vec![ValidationError::EmptySecret]));
    }
}
