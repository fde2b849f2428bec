//! Axum HTTP API server.
//!
//! This crate provides:
//! - `POST /api/detect-age` adult/minor classification of a base64 image
//! - `GET /health` liveness check
//! - CORS, request ids, body size limits and optional per-IP rate limiting
//! - Prometheus metrics

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;

pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use services::{AgeClassifier, ClassifyError};
pub use state::AppState;
