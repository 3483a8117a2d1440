use crate::StoreError;
use std::collections::HashMap;
use std::sync::RwLock;

/// Read side of a key-value store holding encoded vectors.
///
/// Keys are raw token bytes. Implementations must tolerate concurrent
/// readers without external locking.
pub trait VectorSource: Send + Sync {
    /// Retrieve a value by key. `Ok(None)` means the key is absent.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;
}

/// Write side, used only when building a store.
pub trait VectorSink {
    /// Insert or overwrite multiple entries in one batch.
    fn batch_put(&self, entries: Vec<(Vec<u8>, Vec<u8>)>) -> Result<(), StoreError>;
}

/// Configuration for selecting and building a backend.
///
/// # Example
/// ```
/// use index::BackendConfig;
///
/// // In-memory (for testing)
/// let config = BackendConfig::in_memory();
///
/// // Redb file built by `vectorizer-import`
/// let config = BackendConfig::redb("/data/glove.redb");
/// ```
#[derive(Clone, Debug, Default)]
pub enum BackendConfig {
    /// Read an existing redb file. It is never written to.
    ///
    /// Requires the `backend-redb` feature (enabled by default).
    Redb { path: String },
    /// Empty in-memory store. Useful for testing.
    #[default]
    InMemory,
}

impl BackendConfig {
    pub fn in_memory() -> Self {
        BackendConfig::InMemory
    }

    pub fn redb<P: Into<String>>(path: P) -> Self {
        BackendConfig::Redb { path: path.into() }
    }

    /// Build the backend described by this configuration.
    pub fn build(&self) -> Result<Box<dyn VectorSource>, StoreError> {
        match self {
            BackendConfig::InMemory => Ok(Box::new(InMemoryBackend::new())),
            BackendConfig::Redb { path } => {
                #[cfg(feature = "backend-redb")]
                {
                    Ok(Box::new(RedbBackend::open_read_only(path)?))
                }
                #[cfg(not(feature = "backend-redb"))]
                {
                    let _ = path;
                    Err(StoreError::backend("redb backend disabled at compile time"))
                }
            }
        }
    }
}

/// An in-memory backend using a `RwLock` around a `HashMap`.
pub struct InMemoryBackend {
    records: RwLock<HashMap<Vec<u8>, Vec<u8>>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Insert a raw value.
    pub fn insert(&self, key: impl Into<Vec<u8>>, value: Vec<u8>) {
        self.records
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.into(), value);
    }

    pub fn len(&self) -> usize {
        self.records
            .read()
            .map(|guard| guard.len())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl VectorSource for InMemoryBackend {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        let guard = self
            .records
            .read()
            .map_err(|_| StoreError::backend("poisoned lock"))?;
        Ok(guard.get(key).cloned())
    }
}

impl VectorSink for InMemoryBackend {
    fn batch_put(&self, entries: Vec<(Vec<u8>, Vec<u8>)>) -> Result<(), StoreError> {
        let mut guard = self
            .records
            .write()
            .map_err(|_| StoreError::backend("poisoned lock"))?;
        guard.extend(entries);
        Ok(())
    }
}

/// The redb backend: a pure Rust embedded store holding the vectors on disk.
#[cfg(feature = "backend-redb")]
pub mod redb;

#[cfg(feature = "backend-redb")]
pub use self::redb::{RedbBackend, RedbWriter};
