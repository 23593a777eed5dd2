//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → cors.rs (preflight, origin allow-list)
//!     → rate_limit.rs (check per-IP limits)
//!     → auth.rs (shared secret, /chat only)
//!     → Pass to handler
//! ```
//!
//! # Design Decisions
//! - Fail closed: reject on any security check failure
//! - Rejections use the same JSON error body as handlers

pub mod auth;
pub mod cors;
pub mod rate_limit;

pub use auth::{require_frontend_secret, SecretGuard};
pub use cors::{origin_guard, OriginPolicy};
pub use rate_limit::{rate_limit_middleware, RateLimiterState};
