//! Workspace umbrella crate for the word-vector aggregation service.
//!
//! This crate stitches the text layer, the vector store and the embedding
//! math into one pipeline: text → tokens → vectors → weights → centroid.
//! A [`Vectorizer`] is built once at startup, holds the store handle and
//! stopword set, and is shared by reference with every request.

pub use canonical::{tokenize, tokenize_words, StopwordSet, Token, ENGLISH_STOPWORDS};
pub use embedding::{centroid, weights, ShapeError, Vector, WeightError, WeightedVector};
pub use index::{
    BackendConfig, InMemoryBackend, Lookup, StoreConfig, StoreError, VectorSource, VectorStore,
};

use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

/// Occurrence count assigned to every retained vector.
///
/// Every vector gets the same value, so the weight model currently yields
/// uniform weights. Real per-token frequencies would plug in here.
pub const DEFAULT_OCCURRENCE: u64 = 102;

/// Errors that can occur while aggregating queries.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PipelineError {
    #[error("at query {query}: {source}")]
    Store {
        query: usize,
        #[source]
        source: StoreError,
    },
    #[error("no vectors found for query")]
    NoVectors,
    #[error("weighting failed: {0}")]
    Weight(#[from] WeightError),
    #[error("centroid failed: {0}")]
    Shape(#[from] ShapeError),
    #[error("aggregation cancelled")]
    Cancelled,
}

impl PipelineError {
    /// `true` when the input, not the service, is at fault.
    pub fn is_client_error(&self) -> bool {
        matches!(self, PipelineError::NoVectors)
    }
}

/// Tunables for a [`Vectorizer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorizerConfig {
    /// Synthetic occurrence count fed to the weight model for every vector.
    pub occurrence: u64,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            occurrence: DEFAULT_OCCURRENCE,
        }
    }
}

/// The aggregation pipeline. Construct once, share via `Arc`.
pub struct Vectorizer {
    store: VectorStore,
    stopwords: StopwordSet,
    cfg: VectorizerConfig,
}

impl Vectorizer {
    pub fn new(store: VectorStore, stopwords: StopwordSet, cfg: VectorizerConfig) -> Self {
        Self {
            store,
            stopwords,
            cfg,
        }
    }

    /// English stopwords and default config over `store`.
    pub fn with_store(store: VectorStore) -> Self {
        Self::new(store, StopwordSet::english(), VectorizerConfig::default())
    }

    pub fn store(&self) -> &VectorStore {
        &self.store
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub fn config(&self) -> &VectorizerConfig {
        &self.cfg
    }

    /// Vectors for the given words, in order. Stopwords and unknown words
    /// are dropped; store errors abort.
    pub fn vectors_for_words<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<Vector>, StoreError> {
        let mut vectors = Vec::with_capacity(words.len());
        for word in words {
            let word = word.as_ref();
            if self.stopwords.is_stopword(word) {
                continue;
            }
            if let Lookup::Found(vector) = self.store.resolve(word)? {
                vectors.push(vector);
            }
        }
        Ok(vectors)
    }

    /// Reduce every query's retained word vectors into one weighted centroid.
    pub fn aggregate_queries<S: AsRef<str>>(&self, queries: &[S]) -> Result<Vector, PipelineError> {
        self.aggregate_queries_until(queries, &AtomicBool::new(false))
    }

    /// [`Self::aggregate_queries`], giving up with
    /// [`PipelineError::Cancelled`] once `cancelled` is set. The flag is
    /// checked before each query.
    pub fn aggregate_queries_until<S: AsRef<str>>(
        &self,
        queries: &[S],
        cancelled: &AtomicBool,
    ) -> Result<Vector, PipelineError> {
        let mut vectors = Vec::new();

        for (query, text) in queries.iter().enumerate() {
            if cancelled.load(Ordering::Relaxed) {
                tracing::debug!(query, "aggregation cancelled");
                return Err(PipelineError::Cancelled);
            }

            let words = tokenize_words(text.as_ref());
            if words.is_empty() {
                continue;
            }

            let found = self.vectors_for_words(&words).map_err(|source| {
                tracing::warn!(query, error = %source, "vector store lookup failed");
                PipelineError::Store { query, source }
            })?;
            tracing::debug!(query, tokens = words.len(), kept = found.len(), "query resolved");
            vectors.extend(found);
        }

        if vectors.is_empty() {
            return Err(PipelineError::NoVectors);
        }

        let occurrences = vec![self.cfg.occurrence; vectors.len()];
        let weights = weights(&occurrences)?;
        Ok(centroid(&vectors, &weights)?)
    }
}
