//! Browser origin policy.
//!
//! # Responsibilities
//! - Answer preflight requests and add `Access-Control-*` headers
//! - Reject requests whose `Origin` is not on the allow-list
//!
//! # Design Decisions
//! - Requests without `Origin` (curl, mobile apps) are allowed
//! - Exact origin comparison, no wildcards, so credentials can be allowed

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderName, HeaderValue, Method, Request},
    middleware::Next,
    response::Response,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::CorsConfig;
use crate::http::error::ApiError;

/// The configured origin allow-list.
#[derive(Debug, Clone)]
pub struct OriginPolicy {
    allowed: Arc<[HeaderValue]>,
    allow_credentials: bool,
}

impl OriginPolicy {
    pub fn new(config: &CorsConfig) -> Result<Self, header::InvalidHeaderValue> {
        let allowed = config
            .allowed_origins
            .iter()
            .map(|o| HeaderValue::from_str(o))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            allowed: allowed.into(),
            allow_credentials: config.allow_credentials,
        })
    }

    pub fn is_allowed(&self, origin: &HeaderValue) -> bool {
        self.allowed.iter().any(|o| o == origin)
    }

    /// CORS response layer. `secret_header` is added to the allowed headers.
    pub fn layer(&self, secret_header: HeaderName) -> CorsLayer {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(self.allowed.iter().cloned()))
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE, secret_header, header::AUTHORIZATION])
            .allow_credentials(self.allow_credentials)
    }
}

/// Reject requests from origins outside the allow-list.
pub async fn origin_guard(
    State(policy): State<OriginPolicy>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    if let Some(origin) = request.headers().get(header::ORIGIN) {
        if !policy.is_allowed(origin) {
            tracing::warn!(origin = ?origin, "CORS blocked origin");
            return Err(ApiError::OriginNotAllowed);
        }
    }
    Ok(next.run(request).await)
}
