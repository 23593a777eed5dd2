//! Shared-secret header check for the chat endpoint.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header::InvalidHeaderName, HeaderMap, HeaderName, Request},
    middleware::Next,
    response::Response,
};

use crate::config::AuthConfig;
use crate::http::error::ApiError;

/// Compares the secret header against the configured value.
///
/// Requests without the header (or with an empty one) pass. Only a header
/// that is present and differs is rejected.
#[derive(Debug, Clone)]
pub struct SecretGuard {
    header: HeaderName,
    expected: Option<Arc<str>>,
}

impl SecretGuard {
    pub fn new(config: &AuthConfig) -> Result<Self, InvalidHeaderName> {
        Ok(Self {
            header: HeaderName::try_from(config.header.as_str())?,
            expected: config.frontend_secret.as_deref().map(Arc::from),
        })
    }

    pub fn header(&self) -> &HeaderName {
        &self.header
    }

    pub fn check(&self, headers: &HeaderMap) -> Result<(), ApiError> {
        let (Some(expected), Some(supplied)) = (&self.expected, headers.get(&self.header)) else {
            return Ok(());
        };

        if supplied.is_empty() || supplied.as_bytes() == expected.as_bytes() {
            Ok(())
        } else {
            Err(ApiError::InvalidSecret)
        }
    }
}

pub async fn require_frontend_secret(
    State(guard): State<SecretGuard>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    if let Err(err) = guard.check(request.headers()) {
        tracing::warn!(header = %guard.header(), "Rejected request with invalid secret");
        return Err(err);
    }
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn guard(secret: Option<&str>) -> SecretGuard {
        SecretGuard::new(&AuthConfig {
            header: "x-frontend-secret".into(),
            frontend_secret: secret.map(String::from),
        })
        .unwrap()
    }

    fn headers(value: Option<&'static str>) -> HeaderMap {
        let mut map = HeaderMap::new();
        if let Some(v) = value {
            map.insert("x-frontend-secret", HeaderValue::from_static(v));
        }
        map
    }

    #[test]
    fn test_missing_header_passes() {
        assert!(guard(Some("s3cret")).check(&headers(None)).is_ok());
    }

    #[test]
    fn test_matching_header_passes() {
        assert!(guard(Some("s3cret")).check(&headers(Some("s3cret"))).is_ok());
    }

    #[test]
    fn test_mismatched_header_rejected() {
        let result = guard(Some("s3cret")).check(&headers(Some("guess")));
        assert!(matches!(result, Err(ApiError::InvalidSecret)));
    }

    #[test]
    fn test_empty_header_passes() {
        assert!(guard(Some("s3cret")).check(&headers(Some(""))).is_ok());
    }

    #[test]
    fn test_unconfigured_secret_ignores_header() {
        assert!(guard(None).check(&headers(Some("anything"))).is_ok());
    }

    #[test]
    fn test_invalid_header_name() {
        let err = SecretGuard::new(&AuthConfig {
            header: "not valid".into(),
            frontend_secret: None,
        });
        assert!(err.is_err());
    }
}
