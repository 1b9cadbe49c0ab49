//! End-to-end tests for the HTTP API with mocked providers.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use greeter_core::{Occasion, ProviderKind};
use greeter_models::ProviderSettings;
use greeter_server::{GreetingService, ProvidersConfig, create_router};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::{Value, json};
use std::sync::Arc;
use test_utils::CapturedLogs;
use tower::ServiceExt;

mod test_utils;

fn settings(kind: ProviderKind, base_url: &str, key: Option<&str>) -> ProviderSettings {
    ProviderSettings::builder()
        .kind(kind)
        .api_key(key.map(str::to_string))
        .model(match kind {
            ProviderKind::Gemini => "gemini-test",
            ProviderKind::OpenAi => "gpt-test",
        })
        .base_url(base_url)
        .build()
        .expect("valid settings")
}

fn router(server: &ServerGuard, gemini_key: Option<&str>, openai_key: Option<&str>) -> Router {
    let url = server.url();
    let providers = ProvidersConfig::builder()
        .gemini(settings(ProviderKind::Gemini, &url, gemini_key))
        .openai(settings(ProviderKind::OpenAi, &url, openai_key))
        .build()
        .expect("valid providers");
    create_router(Arc::new(GreetingService::new(providers)))
}

async fn post_json(app: Router, path: &str, body: Value) -> anyhow::Result<(StatusCode, Value)> {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))?;
    let response = app.oneshot(request).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, serde_json::from_slice(&bytes)?))
}

async fn openai_mock(server: &mut ServerGuard, status: usize, body: &str) -> mockito::Mock {
    server
        .mock("POST", "/v1/chat/completions")
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

#[tokio::test]
async fn test_missing_prompt_is_rejected_without_provider_call() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let app = router(&server, Some("g"), Some("o"));

    let (status, body) = post_json(app.clone(), "/api/generate", json!({ "useLLM": true })).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "prompt string required" }));

    let (status, _) = post_json(app, "/generate", json!({ "prompt": 5, "useLLM": true })).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_non_json_body_is_rejected() -> anyhow::Result<()> {
    let server = Server::new_async().await;
    let request = Request::builder()
        .method("POST")
        .uri("/api/generate")
        .body(Body::from("prompt=hello"))?;
    let response = router(&server, None, None).oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn test_rule_based_when_llm_not_requested() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .expect(0)
        .create_async()
        .await;
    let app = router(&server, None, Some("o"));

    let (status, body) = post_json(app, "/api/generate", json!({ "prompt": "DIWALI wishes" })).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": Occasion::Diwali.template() }));
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_missing_credentials_fall_back() -> anyhow::Result<()> {
    let (logs, _guard) = CapturedLogs::install();
    let server = Server::new_async().await;
    let app = router(&server, None, None);

    let (status, body) = post_json(
        app,
        "/api/generate",
        json!({ "prompt": "happy birthday and merry christmas", "useLLM": true, "provider": "openai" }),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], Occasion::Christmas.template());
    assert!(logs.contains("LLM generation failed"), "{}", logs.contents());
    assert!(logs.contains("OPENAI_API_KEY not configured"));
    Ok(())
}

#[tokio::test]
async fn test_provider_error_falls_back() -> anyhow::Result<()> {
    let (logs, _guard) = CapturedLogs::install();
    let mut server = Server::new_async().await;
    let mock = openai_mock(&mut server, 500, "internal error").await;
    let app = router(&server, None, Some("o"));

    let (status, body) = post_json(
        app,
        "/api/generate",
        json!({ "prompt": "just checking in", "useLLM": true, "provider": "openai" }),
    )
    .await?;
    mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], Occasion::Message.template());
    assert!(logs.contains("LLM generation failed"), "{}", logs.contents());
    assert!(logs.contains("API error: 500 internal error"));
    Ok(())
}

#[tokio::test]
async fn test_gemini_transport_failure_falls_back_without_leaking_key() -> anyhow::Result<()> {
    let (logs, _guard) = CapturedLogs::install();
    let key = "SECRET-GEMINI-KEY";
    let providers = ProvidersConfig::builder()
        .gemini(settings(ProviderKind::Gemini, "http://127.0.0.1:1", Some(key)))
        .openai(settings(ProviderKind::OpenAi, "http://127.0.0.1:1", None))
        .build()?;
    let app = create_router(Arc::new(GreetingService::new(providers)));

    let (status, body) = post_json(
        app,
        "/api/generate",
        json!({ "prompt": "diwali offers", "useLLM": true }),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], Occasion::Diwali.template());
    assert!(logs.contains("LLM generation failed"));
    assert!(!logs.contains(key), "{}", logs.contents());
    Ok(())
}

#[tokio::test]
async fn test_openai_message_is_relayed() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let mock = openai_mock(
        &mut server,
        200,
        r#"{"choices":[{"message":{"content":"  Hi {name}!  "}}]}"#,
    )
    .await;
    let app = router(&server, None, Some("o"));

    let (status, body) = post_json(
        app,
        "/generate",
        json!({ "prompt": "christmas sale", "useLLM": true, "provider": "OpenAI" }),
    )
    .await?;
    mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Hi {name}!" }));
    Ok(())
}

#[tokio::test]
async fn test_gemini_alt_shape_is_relayed() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta2/models/gemini-test:generateText")
        .match_query(Matcher::UrlEncoded("key".into(), "g".into()))
        .with_status(200)
        .with_body(r#"{"candidates":[{"output":"Hi {name}!"}]}"#)
        .create_async()
        .await;
    let app = router(&server, Some("g"), None);

    let (status, body) = post_json(
        app,
        "/api/generate",
        json!({ "prompt": "birthday", "useLLM": true, "provider": "gemini" }),
    )
    .await?;
    mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Hi {name}!" }));
    Ok(())
}

#[tokio::test]
async fn test_empty_provider_text_bypasses_classifier() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let _mock = openai_mock(&mut server, 200, r#"{"choices":[{"message":{"content":"   "}}]}"#).await;
    let app = router(&server, None, Some("o"));

    let (status, body) = post_json(
        app,
        "/api/generate",
        json!({ "prompt": "diwali", "useLLM": true, "provider": "openai" }),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "" }));
    Ok(())
}

#[tokio::test]
async fn test_default_provider_follows_configured_credential() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let mock = openai_mock(
        &mut server,
        200,
        r#"{"choices":[{"message":{"content":"From OpenAI, {name}"}}]}"#,
    )
    .await;
    let app = router(&server, None, Some("o"));

    let (_, body) = post_json(app, "/api/generate", json!({ "prompt": "hi", "useLLM": true })).await?;
    mock.assert_async().await;
    assert_eq!(body["message"], "From OpenAI, {name}");
    Ok(())
}

#[tokio::test]
async fn test_unknown_provider_falls_back_without_call() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let app = router(&server, Some("g"), Some("o"));

    let (status, body) = post_json(
        app,
        "/api/generate",
        json!({ "prompt": "new year party", "useLLM": true, "provider": "claude" }),
    )
    .await?;
    mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], Occasion::NewYear.template());
    Ok(())
}

#[tokio::test]
async fn test_non_post_generate_is_405() -> anyhow::Result<()> {
    let server = Server::new_async().await;
    let request = Request::builder()
        .method("GET")
        .uri("/api/generate")
        .body(Body::empty())?;
    let response = router(&server, None, None).oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let body: Value = serde_json::from_slice(&bytes)?;
    assert_eq!(body, json!({ "error": "Method not allowed" }));
    Ok(())
}

#[tokio::test]
async fn test_ping_and_health() -> anyhow::Result<()> {
    let server = Server::new_async().await;
    let app = router(&server, None, None);

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/api/ping").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(&to_bytes(response.into_body(), usize::MAX).await?[..], b"pong");

    let (status, body) = post_json(app.clone(), "/api/ping", json!({})).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true, "method": "POST" }));

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(&to_bytes(response.into_body(), usize::MAX).await?[..], b"ok");
    Ok(())
}
