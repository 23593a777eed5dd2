//! End-to-end tests against a listening server.

use keyword_chatbot::config::ChatbotConfig;
use reqwest::StatusCode;
use serde_json::{json, Value};

mod common;

async fn ask(server: &common::TestServer, message: &str) -> (StatusCode, Value) {
    let res = common::client()
        .post(server.url("/chat"))
        .json(&json!({ "message": message }))
        .send()
        .await
        .expect("server unreachable");
    let status = res.status();
    (status, res.json().await.unwrap())
}

#[tokio::test]
async fn test_scenarios() {
    let server = common::start_server(ChatbotConfig::default()).await;

    let (status, body) = ask(&server, "what is the course fee").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["reply"].as_str().unwrap().contains("BDT 10,000"));

    let (_, body) = ask(&server, "কোর্স ফি কত").await;
    assert!(body["reply"].as_str().unwrap().contains("৳ ১০,০০০"));

    let (_, body) = ask(&server, "do you do free trial classes").await;
    assert!(body["reply"]
        .as_str()
        .unwrap()
        .contains("we don't offer any free classes"));

    let (_, body) = ask(&server, "xyzzy plugh").await;
    assert_eq!(
        body["reply"],
        "🙂 Sorry, I didn't understand. Could you rephrase?"
    );

    let (_, body) = ask(&server, "ঢাকা").await;
    assert_eq!(
        body["reply"],
        "🙂 দুঃখিত, আমি সেটা বুঝতে পারিনি। একটু ভিন্নভাবে বলবেন?"
    );

    let (status, body) = ask(&server, "").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Message required" }));

    server.stop().await;
}

#[tokio::test]
async fn test_form_body() {
    let server = common::start_server(ChatbotConfig::default()).await;

    let res = common::client()
        .post(server.url("/chat"))
        .form(&[("message", "how long is the course?")])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert!(body["reply"].as_str().unwrap().starts_with("⏰"));

    server.stop().await;
}

#[tokio::test]
async fn test_secret_header() {
    let mut config = ChatbotConfig::default();
    config.auth.frontend_secret = Some("WE_ARE_TESTING".into());
    let server = common::start_server(config).await;
    let client = common::client();

    let res = client
        .post(server.url("/chat"))
        .header("x-frontend-secret", "wrong")
        .json(&json!({ "message": "contact" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .post(server.url("/chat"))
        .header("x-frontend-secret", "WE_ARE_TESTING")
        .json(&json!({ "message": "contact" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert!(body["reply"].as_str().unwrap().contains("codesellacademy@gmail.com"));

    server.stop().await;
}

#[tokio::test]
async fn test_rate_limit_per_client() {
    let mut config = ChatbotConfig::default();
    config.rate_limit.max_requests = 3;
    config.rate_limit.window_secs = 3600;
    let server = common::start_server(config).await;
    let client = common::client();

    for _ in 0..3 {
        let res = client.get(server.url("/health")).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()["ratelimit-limit"], "3");
    }

    let res = client.get(server.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(res.headers().contains_key("retry-after"));

    server.stop().await;
}

#[tokio::test]
async fn test_health_and_info() {
    let server = common::start_server(ChatbotConfig::default()).await;
    let client = common::client();

    let health: Value = client
        .get(server.url("/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["status"], "ok");

    let info: Value = client
        .get(server.url("/"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(info["endpoints"]["health"], "/health");

    server.stop().await;
}

#[tokio::test]
async fn test_graceful_shutdown_closes_listener() {
    let server = common::start_server(ChatbotConfig::default()).await;
    let addr = server.addr;
    server.stop().await;

    let result = common::client()
        .get(format!("http://{}/health", addr))
        .send()
        .await;
    assert!(result.is_err());
}
