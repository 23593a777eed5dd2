//! Chat request extraction.
//!
//! # Responsibilities
//! - Accept JSON (`{"message": ...}`) and url-encoded (`message=...`) bodies
//! - Coerce non-string JSON values to text, treating falsy values as absent
//! - Treat any other content type as a request with no message
//!
//! # Design Decisions
//! - Missing or null message becomes empty text; the handler rejects it
//! - Body parse failures keep the rejection's status (400, 413, ...)

use std::collections::HashMap;

use axum::{
    extract::{FromRequest, Request},
    http::header,
    Form, Json,
};
use serde_json::Value;

use crate::http::error::ApiError;

/// Raw chat text, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(request: &Request) -> BodyKind {
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_ascii_lowercase())
        .unwrap_or_default();

    let mime = content_type.split(';').next().unwrap_or_default().trim();
    if mime == "application/json" || mime.ends_with("+json") {
        BodyKind::Json
    } else if mime == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else {
        BodyKind::Other
    }
}

/// Text of a JSON `message` field.
///
/// Falsy values (`null`, `false`, `0`, `""`) carry no message. Other values
/// are rendered the way a browser client would stringify them.
fn message_text(value: Value) -> String {
    match value {
        Value::Null | Value::Bool(false) => String::new(),
        Value::Number(n) if n.as_f64() == Some(0.0) => String::new(),
        other => display_text(&other),
    }
}

fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        Value::Array(items) => items.iter().map(display_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

impl<S> FromRequest<S> for ChatRequest
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let message = match body_kind(&req) {
            BodyKind::Json => {
                let Json(body) = Json::<Value>::from_request(req, state)
                    .await
                    .map_err(|e| ApiError::InvalidBody {
                        status: e.status(),
                        message: e.body_text(),
                    })?;
                match body {
                    Value::Object(mut fields) => {
                        fields.remove("message").map(message_text).unwrap_or_default()
                    }
                    _ => String::new(),
                }
            }
            BodyKind::Form => {
                let Form(mut fields) = Form::<HashMap<String, String>>::from_request(req, state)
                    .await
                    .map_err(|e| ApiError::InvalidBody {
                        status: e.status(),
                        message: e.body_text(),
                    })?;
                fields.remove("message").unwrap_or_default()
            }
            BodyKind::Other => String::new(),
        };

        Ok(Self { message })
    }
}
