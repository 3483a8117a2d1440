use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use vectorizer::Vector;

/// Request to aggregate one or more free-text queries
#[derive(Debug, Deserialize)]
pub struct VectorizeRequest {
    /// Query strings; their retained words are pooled into one centroid
    pub query: Vec<String>,
}

/// Aggregated vector for the whole request
#[derive(Debug, Serialize, Deserialize)]
pub struct VectorizeResponse {
    pub vector: Vector,
}

/// Sets the shared flag when dropped.
///
/// The timeout layer drops the handler future on expiry; the blocking
/// aggregation sees the flag at its next query boundary and stops.
struct CancelOnDrop(Arc<AtomicBool>);

impl Drop for CancelOnDrop {
    fn drop(&mut self) {
        self.0.store(true, Ordering::Relaxed);
    }
}

/// Aggregate the request's queries into a single vector (POST /vectorize)
pub async fn vectorize(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<VectorizeRequest>, JsonRejection>,
) -> ServerResult<Json<VectorizeResponse>> {
    let Json(request) = payload.map_err(|rejection| {
        let err = match rejection.status() {
            StatusCode::PAYLOAD_TOO_LARGE => ServerError::PayloadTooLarge,
            _ => ServerError::BadRequest(rejection.body_text()),
        };
        metrics::counter!("vectorizer_requests_total", "outcome" => err.error_code()).increment(1);
        err
    })?;

    let start = Instant::now();
    let queries = request.query;
    let query_count = queries.len();

    let cancelled = Arc::new(AtomicBool::new(false));
    let _guard = CancelOnDrop(Arc::clone(&cancelled));
    let vectorizer = Arc::clone(&state.vectorizer);

    let result = tokio::task::spawn_blocking(move || {
        vectorizer.aggregate_queries_until(&queries, &cancelled)
    })
    .await
    .map_err(|err| ServerError::Internal(format!("vectorize task failed: {err}")))?;

    let elapsed = start.elapsed();
    metrics::histogram!("vectorizer_request_duration_seconds").record(elapsed.as_secs_f64());

    match result {
        Ok(vector) => {
            metrics::counter!("vectorizer_requests_total", "outcome" => "ok").increment(1);
            tracing::debug!(
                queries = query_count,
                dimension = vector.dim(),
                duration_ms = %elapsed.as_millis(),
                "vectorized"
            );
            Ok(Json(VectorizeResponse { vector }))
        }
        Err(err) => {
            let err = ServerError::from(err);
            metrics::counter!("vectorizer_requests_total", "outcome" => err.error_code())
                .increment(1);
            tracing::info!(queries = query_count, error = %err, "vectorize failed");
            Err(err)
        }
    }
}
