use crate::error::{ServerError, ServerResult};
use crate::state::{ServerState, StoreStatus};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use std::time::SystemTime;

/// Global server start time for uptime calculation
static SERVER_START_TIME: once_cell::sync::Lazy<SystemTime> =
    once_cell::sync::Lazy::new(SystemTime::now);

fn uptime_secs() -> u64 {
    SERVER_START_TIME
        .elapsed()
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Liveness probe. Plain-text `OK` for load balancers.
pub async fn health_check() -> &'static str {
    "OK"
}

/// Readiness check endpoint
///
/// The store is opened before the listener binds, so a running server is
/// always ready; this reports what it is serving.
pub async fn readiness_check(
    State(state): State<Arc<ServerState>>,
) -> ServerResult<impl IntoResponse> {
    let store = StoreStatus {
        path: state.config.store_path.clone(),
        dimension: state.vectorizer.store().dimension(),
        stopwords: state.vectorizer.stopwords().len(),
    };

    Ok(Json(json!({
        "status": "ready",
        "service": "vectorizer-server",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": uptime_secs(),
        "store": store,
        "occurrence": state.vectorizer.config().occurrence,
    })))
}

/// Prometheus metrics endpoint
pub async fn metrics(State(state): State<Arc<ServerState>>) -> ServerResult<impl IntoResponse> {
    if !state.config.metrics_enabled {
        return Err(ServerError::NotFound);
    }
    match &state.metrics {
        Some(handle) => Ok(handle.render()),
        // Enabled but no recorder installed (embedded router): uptime only.
        None => Ok(format!(
            "# TYPE vectorizer_uptime_seconds gauge\nvectorizer_uptime_seconds {}\n",
            uptime_secs()
        )),
    }
}
