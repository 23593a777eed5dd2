use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::request::ChatRequest;
use crate::matching::{IncomingMessage, KeywordMatcher};
use crate::observability::metrics;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub matcher: Arc<KeywordMatcher>,
    pub service_name: Arc<str>,
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: String,
    pub time: String,
}

#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub health: &'static str,
    pub chat: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: String,
    pub endpoints: Endpoints,
    pub version: &'static str,
}

pub async fn chat(
    State(state): State<AppState>,
    request: ChatRequest,
) -> Result<Json<ChatReply>, ApiError> {
    let message = IncomingMessage::new(&request.message)?;

    let started = Instant::now();
    let reply = state.matcher.reply(&message);
    metrics::record_reply(&reply, started);

    match reply.matched {
        Some(m) => tracing::info!(
            language = %reply.language,
            topic = %m.record.topic,
            phase = m.kind.as_str(),
            "Answered chat message"
        ),
        None => tracing::info!(language = %reply.language, "No answer matched"),
    }

    Ok(Json(ChatReply {
        reply: reply.text.to_string(),
    }))
}

pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        service: state.service_name.to_string(),
        time: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
    })
}

pub async fn index(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: format!("{} is running!", state.service_name),
        endpoints: Endpoints {
            health: "/health",
            chat: "/chat (POST)",
        },
        version: env!("CARGO_PKG_VERSION"),
    })
}
