//! # Vectorizer Embedding Math
//!
//! Vector type and the two numeric stages that turn a bag of word vectors
//! into one phrase vector:
//!
//! 1.  **Weighting**: occurrence counts are mapped onto a logarithmic curve
//!     so frequent terms count less, with a floor so they never vanish.
//!     See [`weights`].
//! 2.  **Aggregation**: vectors are combined into their weighted mean.
//!     See [`centroid`].
//!
//! ## Contract
//!
//! - Pure functions over in-memory data. No I/O, no global state.
//! - Shape problems (empty input, length or dimension mismatches) are
//!   reported as [`ShapeError`], never truncated or padded.
//! - Non-finite numbers never escape: degenerate weight inputs are
//!   [`WeightError`]s and the centroid refuses a zero weight sum.
//!
//! ## Example Usage
//!
//! ```
//! use embedding::{centroid, weights, Vector};
//!
//! let vectors = vec![Vector::from(vec![1.0, 0.0]), Vector::from(vec![0.0, 1.0])];
//! let w = weights(&[102, 102]).unwrap();
//! let c = centroid(&vectors, &w).unwrap();
//!
//! assert_eq!(c.dim(), 2);
//! assert!((c[0] - 0.5).abs() < 1e-6);
//! ```

mod centroid;
mod error;
mod vector;
mod weights;

pub use crate::centroid::{centroid, centroid_weighted, WeightedVector};
pub use crate::error::{ShapeError, WeightError};
pub use crate::vector::Vector;
pub use crate::weights::{min_max, weights, FREQUENCY_FLOOR};
