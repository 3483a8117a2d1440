//! Router tests: requests go through the full middleware stack via
//! `oneshot`, backed by an in-memory store.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use index::{encode_vector, InMemoryBackend};
use serde_json::{json, Value};
use server::{build_router, ServerConfig, ServerState};
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt; // For oneshot()
use vectorizer::{
    StopwordSet, StoreError, VectorSource, VectorStore, Vectorizer, VectorizerConfig,
};

fn test_app(config: ServerConfig) -> axum::Router {
    let backend = InMemoryBackend::new();
    backend.insert("cat", encode_vector(&[1.0, 2.0]).unwrap());
    backend.insert("dog", encode_vector(&[3.0, 4.0]).unwrap());
    backend.insert("paris", encode_vector(&[10.0, 0.0]).unwrap());
    let vectorizer = Vectorizer::new(
        VectorStore::new(Box::new(backend), 2),
        StopwordSet::english(),
        VectorizerConfig { occurrence: 102 },
    );
    build_router(Arc::new(ServerState::with_vectorizer(
        config,
        Arc::new(vectorizer),
    )))
}

fn app() -> axum::Router {
    test_app(ServerConfig {
        dimension: 2,
        ..Default::default()
    })
}

fn vectorize_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/vectorize")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

async fn body_bytes(body: Body) -> Vec<u8> {
    body.collect().await.unwrap().to_bytes().to_vec()
}

async fn json_body(body: Body) -> Value {
    serde_json::from_slice(&body_bytes(body).await).unwrap()
}

#[tokio::test]
async fn health_returns_plain_ok() {
    let response = app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    assert_eq!(body_bytes(response.into_body()).await, b"OK");
}

#[tokio::test]
async fn ready_reports_store_details() {
    let response = app()
        .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], "ready");
    assert_eq!(body["store"]["dimension"], 2);
    assert_eq!(body["occurrence"], 102);
}

#[tokio::test]
async fn vectorize_returns_mean_of_found_words() {
    let request = vectorize_request(json!({ "query": ["The cat and the dog"] }).to_string());
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body, json!({ "vector": [2.0, 3.0] }));
}

#[tokio::test]
async fn vectorize_pools_words_across_queries() {
    let request = vectorize_request(json!({ "query": ["cat", "Dog!", "PARIS"] }).to_string());
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    let vector: Vec<f64> = serde_json::from_value(body["vector"].clone()).unwrap();
    assert!((vector[0] - 14.0 / 3.0).abs() < 1e-5);
    assert!((vector[1] - 2.0).abs() < 1e-5);
}

#[tokio::test]
async fn stopwords_only_is_unprocessable() {
    let request = vectorize_request(json!({ "query": ["the of and", "a b c"] }).to_string());
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"]["code"], "NO_VECTORS");
}

#[tokio::test]
async fn empty_query_list_is_unprocessable() {
    let request = vectorize_request(json!({ "query": [] }).to_string());
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let response = app()
        .oneshot(vectorize_request("{\"query\": [\"cat\""))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn missing_query_field_is_bad_request() {
    let request = vectorize_request(json!({ "text": "cat" }).to_string());
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let response = app()
        .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn metrics_disabled_is_not_found() {
    let app = test_app(ServerConfig {
        dimension: 2,
        metrics_enabled: false,
        ..Default::default()
    });
    let response = app
        .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let app = test_app(ServerConfig {
        dimension: 2,
        max_body_size_mb: 1,
        ..Default::default()
    });
    let big = "cat ".repeat(300_000);
    let request = vectorize_request(json!({ "query": [big] }).to_string());
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

/// Answers every lookup with `cat`'s vector after a fixed delay.
struct SlowSource {
    delay: Duration,
    calls: Arc<AtomicUsize>,
}

impl VectorSource for SlowSource {
    fn get(&self, _key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        std::thread::sleep(self.delay);
        Ok(Some(encode_vector(&[1.0, 2.0])?))
    }
}

#[tokio::test]
async fn slow_aggregation_times_out_and_stops_early() {
    let calls = Arc::new(AtomicUsize::new(0));
    let source = SlowSource {
        delay: Duration::from_millis(300),
        calls: Arc::clone(&calls),
    };
    let vectorizer = Vectorizer::new(
        VectorStore::new(Box::new(source), 2),
        StopwordSet::english(),
        VectorizerConfig { occurrence: 102 },
    );
    let config = ServerConfig {
        dimension: 2,
        timeout_secs: 1,
        ..Default::default()
    };
    let app = build_router(Arc::new(ServerState::with_vectorizer(
        config,
        Arc::new(vectorizer),
    )));

    // Ten single-word queries: about three seconds of lookups.
    let queries = vec!["cat"; 10];
    let request = vectorize_request(json!({ "query": queries }).to_string());
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);

    // The in-flight query finishes, then the blocking task sees the flag.
    tokio::time::sleep(Duration::from_millis(1500)).await;
    let settled = calls.load(Ordering::SeqCst);
    assert!(settled <= 6, "aggregation kept running: {settled} lookups");
    tokio::time::sleep(Duration::from_millis(700)).await;
    assert_eq!(calls.load(Ordering::SeqCst), settled);
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn request_logs_carry_the_request_id() {
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let request = Request::get("/health")
        .header("x-request-id", "req-42")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "req-42");

    let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
    let started = output
        .lines()
        .find(|line| line.contains("Request started"))
        .expect("request start is logged");
    assert!(started.contains("request_id=req-42"), "{started}");
    let completed = output
        .lines()
        .find(|line| line.contains("Request completed"))
        .expect("request completion is logged");
    assert!(completed.contains("request_id=req-42"), "{completed}");
}
