//! Prometheus metrics for the API server.

use std::time::Instant;

use axum::body::Body;
use axum::extract::MatchedPath;
use axum::http::{Request, Response};
use axum::middleware::Next;
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use unface_models::AgeLabel;

/// Install the Prometheus metrics recorder.
/// Returns a handle that can be used to render metrics.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// Metric names as constants for consistency.
pub mod names {
    // HTTP metrics
    pub const HTTP_REQUESTS_TOTAL: &str = "unface_http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "unface_http_request_duration_seconds";

    // Detection metrics
    pub const AGE_DECISIONS_TOTAL: &str = "unface_age_decisions_total";
    pub const DETECTION_DURATION_SECONDS: &str = "unface_detection_duration_seconds";
    pub const DETECTION_FAILURES_TOTAL: &str = "unface_detection_failures_total";

    // Rate limiting metrics
    pub const RATE_LIMIT_HITS_TOTAL: &str = "unface_rate_limit_hits_total";
}

/// Record an HTTP request.
pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];

    counter!(names::HTTP_REQUESTS_TOTAL, &labels).increment(1);
    histogram!(names::HTTP_REQUEST_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record a classification outcome.
pub fn record_age_decision(label: AgeLabel) {
    counter!(names::AGE_DECISIONS_TOTAL, "label" => label.as_str()).increment(1);
}

/// Record the latency of one provider call, successful or not.
pub fn record_detection_duration(duration_secs: f64) {
    histogram!(names::DETECTION_DURATION_SECONDS).record(duration_secs);
}

/// Record a failed classification.
pub fn record_detection_failure(reason: &'static str) {
    counter!(names::DETECTION_FAILURES_TOTAL, "reason" => reason).increment(1);
}

/// Record a rate limit rejection.
pub fn record_rate_limit_hit(path: &str) {
    counter!(names::RATE_LIMIT_HITS_TOTAL, "path" => path.to_string()).increment(1);
}

/// Middleware recording request count and latency per matched route.
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response<Body> {
    let method = request.method().to_string();
    // Route templates only, so unknown paths cannot blow up label cardinality
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());
    let start = Instant::now();

    let response = next.run(request).await;

    record_http_request(
        &method,
        &path,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );

    response
}
