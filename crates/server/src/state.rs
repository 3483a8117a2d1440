use crate::config::ServerConfig;
use crate::error::ServerResult;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use vectorizer::{StopwordSet, VectorStore, Vectorizer};

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Aggregation pipeline and its read-only store handle (shared across requests)
    pub vectorizer: Arc<Vectorizer>,

    /// Prometheus render handle, present when metrics are enabled
    pub metrics: Option<PrometheusHandle>,
}

impl ServerState {
    /// Open the configured store and build the pipeline around it.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        config.validate()?;
        let store = VectorStore::open(&config.store_config())?;
        let vectorizer = Vectorizer::new(
            store,
            StopwordSet::english(),
            config.vectorizer_config(),
        );
        Ok(Self::with_vectorizer(config, Arc::new(vectorizer)))
    }

    /// Build state around an existing pipeline (e.g. in-memory for tests).
    pub fn with_vectorizer(config: ServerConfig, vectorizer: Arc<Vectorizer>) -> Self {
        Self {
            config: Arc::new(config),
            vectorizer,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

/// Store details reported by the readiness probe
#[derive(Debug, serde::Serialize)]
pub struct StoreStatus {
    pub path: String,
    pub dimension: usize,
    pub stopwords: usize,
}
