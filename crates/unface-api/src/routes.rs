//! API routes.

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;

use crate::handlers::{detect_age, health};
use crate::metrics::metrics_middleware;
use crate::middleware::{
    cors_layer, ip_rate_limiter, rate_limit_middleware, request_id, request_logging,
};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState, metrics_handle: Option<PrometheusHandle>) -> Router {
    let mut api_routes = Router::new().route("/detect-age", post(detect_age));

    if let Some(rps) = state.config.rate_limit_rps {
        api_routes = api_routes.route_layer(middleware::from_fn_with_state(
            ip_rate_limiter(rps),
            rate_limit_middleware,
        ));
    }

    let health_routes = Router::new().route("/health", get(health));

    // Metrics endpoint (if enabled)
    let metrics_routes = if let Some(handle) = metrics_handle {
        Router::new().route("/metrics", get(move || async move { handle.render() }))
    } else {
        Router::new()
    };

    let max_body_size = state.config.max_body_size;
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .merge(metrics_routes)
        .layer(middleware::from_fn(metrics_middleware))
        // Enforced by the body extractors so oversized bodies get a JSON error
        .layer(DefaultBodyLimit::max(max_body_size))
        .layer(middleware::from_fn(request_logging))
        .layer(middleware::from_fn(request_id))
        .layer(cors)
        .with_state(state)
}
