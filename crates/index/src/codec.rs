//! On-disk value format: a bincode (standard config) `Vec<f32>`.

use crate::StoreError;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use embedding::Vector;

/// Encode vector components for storage.
pub fn encode_vector(values: &[f32]) -> Result<Vec<u8>, StoreError> {
    Ok(encode_to_vec(values, standard())?)
}

/// Decode a stored value, requiring exactly `dimension` components and no
/// trailing bytes.
pub fn decode_vector(bytes: &[u8], dimension: usize) -> Result<Vector, StoreError> {
    let (values, consumed): (Vec<f32>, usize) = decode_from_slice(bytes, standard())?;
    if consumed != bytes.len() {
        return Err(StoreError::Decode(format!(
            "{} trailing bytes after vector",
            bytes.len() - consumed
        )));
    }
    if values.len() != dimension {
        return Err(StoreError::Dimension {
            expected: dimension,
            found: values.len(),
        });
    }
    Ok(Vector::from(values))
}
