//! # Vectorizer Index
//!
//! Read-only access to a precomputed word-vector store.
//!
//! ## Core Features
//!
//! - **Pluggable Backends**: anything implementing [`VectorSource`] (a byte
//!   oriented get-by-key) can serve vectors. Out of the box:
//!   - an in-memory `HashMap` backend for tests and demos;
//!   - a redb backend for the on-disk store (`backend-redb` feature, on by
//!     default), which the server only ever reads.
//! - **Two-step resolution**: [`VectorStore::resolve`] tries the token as
//!   given, then its lowercase form. A miss on both is [`Lookup::NotFound`],
//!   a normal outcome kept apart from real I/O or decode failures.
//! - **Import**: [`import::import_glove`] builds a store from GloVe-style
//!   text through any [`VectorSink`].
//!
//! ## Example Usage
//!
//! ```
//! use index::{encode_vector, InMemoryBackend, Lookup, VectorStore};
//!
//! let backend = InMemoryBackend::new();
//! backend.insert("cat", encode_vector(&[0.1, 0.2, 0.3]).unwrap());
//!
//! let store = VectorStore::new(Box::new(backend), 3);
//! match store.resolve("Cat").unwrap() {
//!     Lookup::Found(v) => assert_eq!(v.dim(), 3),
//!     Lookup::NotFound => unreachable!(),
//! }
//! assert!(matches!(store.resolve("dog").unwrap(), Lookup::NotFound));
//! ```

mod backend;
mod codec;
pub mod import;
mod store;

#[cfg(feature = "backend-redb")]
pub use backend::{RedbBackend, RedbWriter};
pub use backend::{BackendConfig, InMemoryBackend, VectorSink, VectorSource};
pub use codec::{decode_vector, encode_vector};
pub use store::{Lookup, StoreConfig, VectorStore};

pub use embedding::Vector;

use thiserror::Error;

/// Default embedding dimension (GloVe 840B / 300d).
pub const DEFAULT_DIMENSION: usize = 300;

/// Failure reading, decoding or importing the vector store.
///
/// A missing key is not an error; see [`Lookup::NotFound`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),
    #[error("vector decode error: {0}")]
    Decode(String),
    #[error("vector encode error: {0}")]
    Encode(String),
    #[error("stored vector has dimension {found}, expected {expected}")]
    Dimension { expected: usize, found: usize },
    #[error("io error: {0}")]
    Io(String),
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

impl From<bincode::error::EncodeError> for StoreError {
    fn from(e: bincode::error::EncodeError) -> Self {
        StoreError::Encode(e.to_string())
    }
}

impl From<bincode::error::DecodeError> for StoreError {
    fn from(e: bincode::error::DecodeError) -> Self {
        StoreError::Decode(e.to_string())
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e.to_string())
    }
}

impl StoreError {
    pub fn backend<E: std::fmt::Display>(err: E) -> Self {
        Self::Backend(err.to_string())
    }
}
