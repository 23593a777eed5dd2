//! Keyword chatbot server.
//!
//! ```text
//!   POST /chat ──▶ security ──▶ ChatRequest ──▶ KeywordMatcher ──▶ {"reply": ...}
//!                 (cors, rate       │              (exact, then
//!                  limit, secret)   │               fallback)
//!                                   ▼
//!                         400 "Message required"
//! ```

use std::path::PathBuf;

use clap::Parser;

use keyword_chatbot::config::load_config;
use keyword_chatbot::knowledge;
use keyword_chatbot::lifecycle::startup;
use keyword_chatbot::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "keyword-chatbot")]
#[command(about = "Keyword-matching FAQ chatbot API", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Validate configuration and answer table, then exit.
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_logging(&config.observability);

    tracing::info!("keyword-chatbot v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        rate_limit_enabled = config.rate_limit.enabled,
        max_requests = config.rate_limit.max_requests,
        window_secs = config.rate_limit.window_secs,
        secret_configured = config.auth.frontend_secret.is_some(),
        "Configuration loaded"
    );

    if cli.check {
        let table = knowledge::load_table(config.knowledge.table_path.as_deref())?;
        tracing::info!(records = table.len(), "Configuration and answer table are valid");
        return Ok(());
    }

    startup::run(config).await?;
    Ok(())
}
