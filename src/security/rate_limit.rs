//! Per-client rate limiting middleware.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{HeaderMap, HeaderName, HeaderValue, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::config::RateLimitConfig;
use crate::http::error::ApiError;
use crate::observability::metrics;

/// Bucket count above which idle buckets are swept.
const PRUNE_THRESHOLD: usize = 4096;

const RATELIMIT_LIMIT: HeaderName = HeaderName::from_static("ratelimit-limit");
const RATELIMIT_REMAINING: HeaderName = HeaderName::from_static("ratelimit-remaining");

/// A simple token bucket rate limiter.
struct TokenBucket {
    tokens: f64,
    last_update: Instant,
}

impl TokenBucket {
    fn new(capacity: f64, now: Instant) -> Self {
        Self {
            tokens: capacity,
            last_update: now,
        }
    }

    fn try_acquire(&mut self, capacity: f64, refill_rate: f64, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.last_update).as_secs_f64();

        // Refill tokens
        self.tokens = (self.tokens + elapsed * refill_rate).min(capacity);
        self.last_update = now;

        if self.tokens >= 1.0 {
            self.tokens -= 1.0;
            true
        } else {
            false
        }
    }
}

/// Result of one rate limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub allowed: bool,
    pub limit: u32,
    pub remaining: u32,
    /// Seconds until the next request would be allowed (0 when allowed).
    pub retry_after_secs: u64,
}

impl Decision {
    fn apply_headers(&self, headers: &mut HeaderMap) {
        headers.insert(RATELIMIT_LIMIT, HeaderValue::from(self.limit));
        headers.insert(RATELIMIT_REMAINING, HeaderValue::from(self.remaining));
    }
}

/// Shared state of the rate limiter.
///
/// `max_requests` per `window` per client, refilled continuously.
pub struct RateLimiterState {
    buckets: Mutex<HashMap<String, TokenBucket>>,
    limit: u32,
    capacity: f64,
    refill_per_sec: f64,
    window: Duration,
}

impl RateLimiterState {
    pub fn new(config: &RateLimitConfig) -> Self {
        let window = Duration::from_secs(config.window_secs.max(1));
        let capacity = f64::from(config.max_requests);
        Self {
            buckets: Mutex::new(HashMap::new()),
            limit: config.max_requests,
            capacity,
            refill_per_sec: capacity / window.as_secs_f64(),
            window,
        }
    }

    /// Spend one request for `client`.
    pub fn check(&self, client: &str) -> Decision {
        self.check_at(client, Instant::now())
    }

    fn check_at(&self, client: &str, now: Instant) -> Decision {
        let mut buckets = self.buckets.lock().expect("rate limiter mutex poisoned");

        if buckets.len() > PRUNE_THRESHOLD {
            // A bucket idle for a whole window is full again; forgetting it changes nothing.
            let window = self.window;
            buckets.retain(|_, b| now.saturating_duration_since(b.last_update) < window);
        }

        let bucket = buckets
            .entry(client.to_string())
            .or_insert_with(|| TokenBucket::new(self.capacity, now));

        let allowed = bucket.try_acquire(self.capacity, self.refill_per_sec, now);
        let retry_after_secs = if allowed {
            0
        } else {
            ((1.0 - bucket.tokens) / self.refill_per_sec).ceil() as u64
        };

        Decision {
            allowed,
            limit: self.limit,
            remaining: bucket.tokens.floor() as u32,
            retry_after_secs,
        }
    }

    /// Number of tracked clients.
    pub fn tracked_clients(&self) -> usize {
        self.buckets.lock().expect("rate limiter mutex poisoned").len()
    }
}

/// Rate limit key: the peer IP, or `unknown` without connection info.
fn client_key(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Middleware function for per-client rate limiting.
pub async fn rate_limit_middleware(
    State(state): State<Arc<RateLimiterState>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let key = client_key(&request);
    let decision = state.check(&key);

    let mut response = if decision.allowed {
        next.run(request).await
    } else {
        tracing::warn!(client = %key, "Rate limit exceeded");
        metrics::record_rate_limited();
        ApiError::RateLimited {
            retry_after_secs: decision.retry_after_secs,
        }
        .into_response()
    };

    decision.apply_headers(response.headers_mut());
    response
}
