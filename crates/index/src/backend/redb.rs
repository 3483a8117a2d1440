//! Redb backend for the on-disk vector store.
//!
//! The serving path opens an existing file through [`RedbBackend`] and only
//! ever begins read transactions. [`RedbWriter`] exists for building a
//! store (see `vectorizer-import`) and for tests.
//!
//! # Layout
//! One table, `vectors`: raw token bytes → bincode-encoded `Vec<f32>`.

use crate::backend::{VectorSink, VectorSource};
use crate::StoreError;
use ::redb::{Database, ReadOnlyDatabase, ReadableDatabase, TableDefinition};
use std::path::Path;
use std::sync::Arc;

/// Table holding token → encoded vector entries.
const VECTORS_TABLE: TableDefinition<&[u8], &[u8]> = TableDefinition::new("vectors");

/// Read-only handle on an existing redb vector store.
///
/// # Thread Safety
/// The `Arc<ReadOnlyDatabase>` is shared by every request. Redb read transactions
/// use MVCC and need no external locking.
pub struct RedbBackend {
    db: Arc<ReadOnlyDatabase>,
}

impl RedbBackend {
    /// Open an existing store for reading. A missing file is an error; no
    /// file or table is ever created here.
    ///
    /// # Example
    /// ```no_run
    /// use index::RedbBackend;
    ///
    /// let backend = RedbBackend::open_read_only("/data/glove.redb").unwrap();
    /// ```
    pub fn open_read_only<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(StoreError::Backend(format!(
                "vector store not found at {}",
                path.display()
            )));
        }
        let db = ReadOnlyDatabase::open(path).map_err(StoreError::backend)?;

        // Fail at startup rather than on the first request if the table is missing.
        let read_txn = db.begin_read().map_err(StoreError::backend)?;
        read_txn
            .open_table(VECTORS_TABLE)
            .map_err(StoreError::backend)?;
        drop(read_txn);

        tracing::info!(path = %path.display(), "opened vector store");
        Ok(Self { db: Arc::new(db) })
    }
}

impl VectorSource for RedbBackend {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        let read_txn = self.db.begin_read().map_err(StoreError::backend)?;
        let table = read_txn
            .open_table(VECTORS_TABLE)
            .map_err(StoreError::backend)?;

        match table.get(key).map_err(StoreError::backend)? {
            Some(value) => Ok(Some(value.value().to_vec())),
            None => Ok(None),
        }
    }
}

/// Writable handle used to build a store.
pub struct RedbWriter {
    db: Database,
}

impl RedbWriter {
    /// Create a store file, or open an existing one to extend it, and make
    /// sure the table exists.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let db = Database::create(path).map_err(StoreError::backend)?;

        let write_txn = db.begin_write().map_err(StoreError::backend)?;
        {
            let _table = write_txn
                .open_table(VECTORS_TABLE)
                .map_err(StoreError::backend)?;
        }
        write_txn.commit().map_err(StoreError::backend)?;

        Ok(Self { db })
    }

    pub fn put(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        self.batch_put(vec![(key.to_vec(), value.to_vec())])
    }
}

impl VectorSink for RedbWriter {
    fn batch_put(&self, entries: Vec<(Vec<u8>, Vec<u8>)>) -> Result<(), StoreError> {
        let write_txn = self.db.begin_write().map_err(StoreError::backend)?;
        {
            let mut table = write_txn
                .open_table(VECTORS_TABLE)
                .map_err(StoreError::backend)?;
            for (key, value) in &entries {
                table
                    .insert(key.as_slice(), value.as_slice())
                    .map_err(StoreError::backend)?;
            }
        }
        write_txn.commit().map_err(StoreError::backend)?;
        Ok(())
    }
}
