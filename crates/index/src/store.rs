//! Token → vector resolution.

use crate::backend::{BackendConfig, VectorSource};
use crate::codec::decode_vector;
use crate::{StoreError, DEFAULT_DIMENSION};
use embedding::Vector;

/// Outcome of resolving one token.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Found(Vector),
    /// Neither the token nor its lowercase form is in the store.
    NotFound,
}

impl Lookup {
    pub fn found(self) -> Option<Vector> {
        match self {
            Lookup::Found(v) => Some(v),
            Lookup::NotFound => None,
        }
    }
}

/// Config for opening a [`VectorStore`].
#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub backend: BackendConfig,
    /// Dimension every stored vector must have.
    pub dimension: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            dimension: DEFAULT_DIMENSION,
        }
    }
}

impl StoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_backend(mut self, backend: BackendConfig) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }
}

/// Read-only vector store accessor.
///
/// Opened once per process and shared by reference; there is no write path.
pub struct VectorStore {
    backend: Box<dyn VectorSource>,
    dimension: usize,
}

impl VectorStore {
    /// Open the backend described by `cfg`.
    pub fn open(cfg: &StoreConfig) -> Result<Self, StoreError> {
        let backend = cfg.backend.build()?;
        Ok(Self::new(backend, cfg.dimension))
    }

    /// Wrap an already built backend (e.g. in-memory for tests).
    pub fn new(backend: Box<dyn VectorSource>, dimension: usize) -> Self {
        Self { backend, dimension }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// First step: the token exactly as given. Backend errors propagate.
    pub fn lookup_exact(&self, token: &str) -> Result<Option<Vec<u8>>, StoreError> {
        self.backend.get(token.as_bytes())
    }

    /// Second step: the lowercase form. Any failure here, absent key or
    /// backend error alike, counts as a miss. Skipped when lowercasing does
    /// not change the token.
    pub fn lookup_lowercase(&self, token: &str) -> Option<Vec<u8>> {
        let lowered = token.to_lowercase();
        if lowered == token {
            return None;
        }
        match self.backend.get(lowered.as_bytes()) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(token, error = %err, "lowercase lookup failed; treating as miss");
                None
            }
        }
    }

    /// Resolve a token: exact lookup, then lowercase fallback, then decode.
    ///
    /// Decode failures are errors even when the value came from the
    /// fallback; only a miss is [`Lookup::NotFound`].
    pub fn resolve(&self, token: &str) -> Result<Lookup, StoreError> {
        let raw = match self.lookup_exact(token)? {
            Some(raw) => raw,
            None => match self.lookup_lowercase(token) {
                Some(raw) => raw,
                None => return Ok(Lookup::NotFound),
            },
        };
        decode_vector(&raw, self.dimension).map(Lookup::Found)
    }
}
