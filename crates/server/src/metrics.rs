//! Prometheus metrics
//!
//! Recording goes through the `metrics` facade and is a no-op until
//! [`init_metrics`] installs the exporter.

use std::time::Duration;

use axum::{http::StatusCode, response::IntoResponse};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use voice_form_core::ExtractionResult;

use crate::ServerError;

pub const REQUESTS_TOTAL: &str = "voice_form_requests_total";
pub const FIELDS_TOTAL: &str = "voice_form_fields_total";
pub const EXTRACTION_SECONDS: &str = "voice_form_extraction_seconds";

const EXTRACTION_BUCKETS: &[f64] = &[0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5];

static PROMETHEUS: OnceCell<PrometheusHandle> = OnceCell::new();

/// Install the Prometheus recorder
///
/// Safe to call more than once; later calls return the installed handle.
pub fn init_metrics() -> Result<PrometheusHandle, ServerError> {
    PROMETHEUS
        .get_or_try_init(|| {
            PrometheusBuilder::new()
                .set_buckets_for_metric(
                    Matcher::Full(EXTRACTION_SECONDS.to_string()),
                    EXTRACTION_BUCKETS,
                )
                .and_then(|builder| builder.install_recorder())
                .map_err(|e| ServerError::Metrics(e.to_string()))
        })
        .cloned()
}

/// Record one processed transcript
pub fn record_extraction(result: &ExtractionResult, elapsed: Duration) {
    let status = if result.status.is_found() {
        "found"
    } else {
        "not_found"
    };
    metrics::counter!(REQUESTS_TOTAL, "status" => status).increment(1);

    for field in result.data.detected() {
        metrics::counter!(FIELDS_TOTAL, "field" => field.as_str()).increment(1);
    }

    metrics::histogram!(EXTRACTION_SECONDS).record(elapsed.as_secs_f64());
}

/// GET /metrics
pub async fn metrics_handler() -> impl IntoResponse {
    match PROMETHEUS.get() {
        Some(handle) => (StatusCode::OK, handle.render()),
        None => (StatusCode::NOT_FOUND, "Metrics are disabled".to_string()),
    }
}
