use std::path::PathBuf;

use clap::{Parser, Subcommand};
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::{json, Value};

use keyword_chatbot::knowledge;
use keyword_chatbot::matching::{IncomingMessage, KeywordMatcher, MatchKind};

#[derive(Parser)]
#[command(name = "chatbot-cli")]
#[command(about = "Client and table tester for the keyword chatbot", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    /// Shared secret sent as x-frontend-secret.
    #[arg(short, long)]
    secret: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a chat message to a running server
    Ask { message: String },
    /// Check server health
    Health,
    /// Show service info
    Info,
    /// Match a message locally without a server
    Match {
        message: String,
        /// Answer table to test instead of the built-in one
        #[arg(short, long)]
        table: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let mut headers = HeaderMap::new();
    if let Some(secret) = &cli.secret {
        headers.insert("x-frontend-secret", HeaderValue::from_str(secret)?);
    }

    match cli.command {
        Commands::Ask { message } => {
            let res = client
                .post(format!("{}/chat", cli.url))
                .headers(headers)
                .json(&json!({ "message": message }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Health => {
            let res = client.get(format!("{}/health", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Info => {
            let res = client.get(format!("{}/", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Match { message, table } => {
            let table = knowledge::load_table(table.as_deref())?;
            let matcher = KeywordMatcher::new(table);
            let message = IncomingMessage::new(&message)?;
            let reply = matcher.reply(&message);

            println!("language: {}", reply.language);
            match reply.matched {
                Some(m) => {
                    println!("topic:    {} (#{})", m.record.topic, m.index);
                    match m.kind {
                        MatchKind::Exact { keyword } => println!("phase:    exact ({:?})", keyword),
                        MatchKind::Fallback { score } => println!("phase:    fallback (score {})", score),
                    }
                }
                None => println!("topic:    <none>"),
            }
            println!("reply:\n{}", reply.text);
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: server returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
