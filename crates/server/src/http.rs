//! HTTP Endpoints
//!
//! REST API for voice form extraction.

use std::time::{Duration, Instant};

use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::{HeaderValue, Method, StatusCode},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use voice_form_core::ExtractionResult;

use crate::metrics::{metrics_handler, record_extraction};
use crate::state::AppState;
use crate::ServerError;

/// Body of `POST /process-voice`
#[derive(Debug, Default, Deserialize)]
pub struct ProcessVoiceRequest {
    /// Transcript; missing or null is treated as empty
    #[serde(default)]
    pub text: Option<String>,
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let (cors_layer, timeout) = {
        let config = state.get_config();
        (
            build_cors_layer(&config.server.cors_origins, config.server.cors_enabled),
            Duration::from_secs(config.server.timeout_seconds),
        )
    };

    Router::new()
        .route("/process-voice", post(process_voice))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/metrics", get(metrics_handler))
        .route("/admin/reload-config", post(reload_config))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
        .layer(cors_layer)
        .with_state(state)
}

/// Build CORS layer from configured origins
///
/// - If cors_enabled is false, returns permissive layer (for dev)
/// - If no configured origin parses, defaults to localhost:3000
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    if !enabled {
        tracing::warn!("CORS is disabled - allowing all origins");
        return CorsLayer::permissive();
    }

    let parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!(origin = %origin, "Invalid CORS origin");
                None
            })
        })
        .collect();

    if parsed_origins.is_empty() {
        tracing::info!("No valid CORS origins configured, defaulting to localhost:3000");
        return CorsLayer::new()
            .allow_origin(HeaderValue::from_static("http://localhost:3000"))
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any);
    }

    tracing::info!("CORS configured with {} origins", parsed_origins.len());
    CorsLayer::new()
        .allow_origin(parsed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

/// POST /process-voice
///
/// Maps a transcript onto form fields. Never fails once the body parses.
async fn process_voice(
    State(state): State<AppState>,
    payload: Result<Json<ProcessVoiceRequest>, JsonRejection>,
) -> Result<Json<ExtractionResult>, ServerError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected process-voice body");
        ServerError::InvalidRequest(rejection.body_text())
    })?;
    let text = request.text.unwrap_or_default();
    let extractor = state.extractor();

    let started = Instant::now();
    let result = extractor.process(&text).await;
    let elapsed = started.elapsed();

    record_extraction(&result, elapsed);
    tracing::info!(
        status = result.status.as_str(),
        fields = result.data.len(),
        transcript_len = text.len(),
        elapsed_ms = elapsed.as_millis() as u64,
        "Processed transcript"
    );

    Ok(Json(result))
}

async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let environment = state.get_config().environment;
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "environment": environment,
    }))
}

/// GET /ready
///
/// Reports which recognizer backs the name fallback. A disabled recognizer
/// still counts as ready; extraction just never falls back.
async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let extractor = state.extractor();
    let ner_status = if extractor.recognizer_enabled() {
        "ok"
    } else {
        "disabled"
    };

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "ready",
            "checks": {
                "ner": {
                    "status": ner_status,
                    "provider": extractor.recognizer_name(),
                },
                "dob_year_cutoff": extractor.config().dob_year_cutoff,
            }
        })),
    )
}

/// POST /admin/reload-config
///
/// Reloads configuration from disk and rebuilds the extractor.
async fn reload_config(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ServerError> {
    state.reload_config().map_err(|e| {
        tracing::error!(error = %e, "Config reload failed");
        e
    })?;

    Ok(Json(serde_json::json!({
        "status": "success",
        "message": "Configuration reloaded successfully",
        "recognizer": state.extractor().recognizer_name(),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use voice_form_config::Settings;

    #[test]
    fn test_router_creation() {
        let state = AppState::new(Settings::default());
        let _ = create_router(state);
    }

    #[test]
    fn test_cors_layer_variants() {
        let _ = build_cors_layer(&[], true);
        let _ = build_cors_layer(&["not a header\n".to_string()], true);
        let _ = build_cors_layer(&["https://forms.example.com".to_string()], true);
        let _ = build_cors_layer(&[], false);
    }
}
