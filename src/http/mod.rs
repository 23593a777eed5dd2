//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → security (CORS, rate limit, shared secret)
//!     → request.rs (JSON / form body → ChatRequest)
//!     → handlers.rs (validate, match, compose)
//!     → error.rs (failures as {"error": ...})
//!     → Send to client
//! ```

pub mod error;
pub mod handlers;
pub mod request;
pub mod server;

pub use error::ApiError;
pub use handlers::AppState;
pub use request::ChatRequest;
pub use server::{HttpServer, ServerError};
