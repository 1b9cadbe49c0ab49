//! HTTP API: message generation, ping and health check.

use crate::{GreetingService, ServerConfig};
use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get, post},
};
use greeter_core::GenerationRequest;
use greeter_error::HttpError;
use serde_json::json;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// API server state.
#[derive(Clone)]
pub struct ApiState {
    /// Generation pipeline.
    pub service: Arc<GreetingService>,
}

impl ApiState {
    /// Creates a new API state.
    pub fn new(service: Arc<GreetingService>) -> Self {
        Self { service }
    }
}

/// Creates the API router.
///
/// The generate handler is mounted at both `/generate` and `/api/generate`.
pub fn create_router(service: Arc<GreetingService>) -> Router {
    let state = ApiState::new(service);
    let generate = post(generate_message).fallback(method_not_allowed);

    Router::new()
        .route("/generate", generate.clone())
        .route("/api/generate", generate)
        .route("/api/ping", any(ping))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Binds the listener and serves until Ctrl+C.
pub async fn serve(config: &ServerConfig, service: Arc<GreetingService>) -> Result<(), HttpError> {
    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|e| HttpError::bind(&address, e))?;

    info!(address = %address, "Message generator listening");

    axum::serve(listener, create_router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(HttpError::serve)?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// `POST {prompt, useLLM, provider}` → `{message}`.
#[instrument(skip_all)]
async fn generate_message(State(state): State<ApiState>, body: Bytes) -> Response {
    let request = match GenerationRequest::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "Rejected generate request");
            return (StatusCode::BAD_REQUEST, Json(json!({ "error": e.message }))).into_response();
        }
    };

    let result = state.service.generate(&request).await;
    (StatusCode::OK, Json(result)).into_response()
}

async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
}

/// Liveness probe for deployments.
#[instrument(skip_all, fields(method = %method))]
async fn ping(method: Method) -> Response {
    if method == Method::GET {
        (StatusCode::OK, "pong").into_response()
    } else {
        (
            StatusCode::OK,
            Json(json!({ "ok": true, "method": method.as_str() })),
        )
            .into_response()
    }
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}
