//! API route handlers
//!
//! - `health`: liveness, readiness and metrics
//! - `vectorize`: query aggregation

pub mod health;
pub mod vectorize;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info (GET /)
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "Vectorizer Server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/vectorize",
            "/health",
            "/ready",
            "/metrics"
        ]
    })))
}

/// 404 Not Found handler
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
