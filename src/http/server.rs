//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, CORS, rate limit, limits)
//! - Guard `/chat` with the shared-secret check
//! - Map handler panics to a generic 500
//! - Bind server to listener and shut down gracefully

use std::any::Any;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::header::{InvalidHeaderName, InvalidHeaderValue},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    catch_panic::CatchPanicLayer,
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ChatbotConfig;
use crate::http::error::ApiError;
use crate::http::handlers::{self, AppState};
use crate::knowledge::{self, AnswerTable, TableError};
use crate::lifecycle::shutdown;
use crate::matching::KeywordMatcher;
use crate::security::{
    origin_guard, rate_limit_middleware, require_frontend_secret, OriginPolicy,
    RateLimiterState, SecretGuard,
};

/// Errors raised while assembling the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error("invalid auth header name: {0}")]
    HeaderName(#[from] InvalidHeaderName),

    #[error("invalid CORS origin: {0}")]
    Origin(#[from] InvalidHeaderValue),
}

/// HTTP server for the chatbot.
pub struct HttpServer {
    router: Router,
    config: ChatbotConfig,
}

impl HttpServer {
    /// Create a server, loading the answer table named by the config.
    pub fn new(config: ChatbotConfig) -> Result<Self, ServerError> {
        let table = knowledge::load_table(config.knowledge.table_path.as_deref())?;
        Self::with_table(config, table)
    }

    /// Create a server around an already loaded table.
    pub fn with_table(config: ChatbotConfig, table: AnswerTable) -> Result<Self, ServerError> {
        let state = AppState {
            matcher: Arc::new(KeywordMatcher::new(table)),
            service_name: Arc::from(config.service.name.as_str()),
        };

        let router = Self::build_router(&config, state)?;
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Layers run outermost first: request id, trace, CORS, origin guard,
    /// rate limit, timeout, body limit, panic catcher, then the route.
    #[allow(deprecated)]
    fn build_router(config: &ChatbotConfig, state: AppState) -> Result<Router, ServerError> {
        let guard = SecretGuard::new(&config.auth)?;
        let origins = OriginPolicy::new(&config.cors)?;
        let cors = origins.layer(guard.header().clone());

        let chat = Router::new()
            .route("/chat", post(handlers::chat))
            .route_layer(middleware::from_fn_with_state(guard, require_frontend_secret));

        let mut router = Router::new()
            .route("/", get(handlers::index))
            .route("/health", get(handlers::health))
            .merge(chat)
            .with_state(state)
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)));

        if config.rate_limit.enabled {
            let limiter = Arc::new(RateLimiterState::new(&config.rate_limit));
            router = router.layer(middleware::from_fn_with_state(limiter, rate_limit_middleware));
        }

        Ok(router
            .layer(middleware::from_fn_with_state(origins, origin_guard))
            .layer(cors)
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid)))
    }

    /// The assembled router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown_rx` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown::wait(shutdown_rx))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ChatbotConfig {
        &self.config
    }
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!(panic = %detail, "Handler panicked");
    ApiError::Internal.into_response()
}
