//! Metrics collection and exposition.
//!
//! # Metrics
//! - `chatbot_replies_total` (counter): replies by outcome (exact, fallback,
//!   none) and language
//! - `chatbot_match_duration_seconds` (histogram): matcher latency
//! - `chatbot_rate_limited_total` (counter): requests rejected by the limiter

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

use crate::matching::Reply;

/// Start the Prometheus scrape endpoint on `addr`.
///
/// Must be called from within the Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Outcome label for a reply.
pub fn outcome_label(reply: &Reply<'_>) -> &'static str {
    reply.matched.map(|m| m.kind.as_str()).unwrap_or("none")
}

pub fn record_reply(reply: &Reply<'_>, started: Instant) {
    metrics::counter!(
        "chatbot_replies_total",
        "outcome" => outcome_label(reply),
        "language" => reply.language.as_str()
    )
    .increment(1);
    metrics::histogram!("chatbot_match_duration_seconds").record(started.elapsed().as_secs_f64());
}

pub fn record_rate_limited() {
    metrics::counter!("chatbot_rate_limited_total").increment(1);
}
