use thiserror::Error;

/// Errors from the centroid aggregator.
///
/// All of these indicate a bug or corrupt data upstream; none are expected
/// in normal operation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShapeError {
    #[error("cannot compute centroid of an empty vector list")]
    Empty,
    #[error("cannot compute weighted centroid: {vectors} vectors but {weights} weights")]
    LengthMismatch { vectors: usize, weights: usize },
    #[error("vector {index} has dimension {found}, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
    #[error("weight sum is {0}; cannot normalize")]
    ZeroWeightSum(f64),
}

/// Errors from the logarithmic weight model.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WeightError {
    #[error("maximum occurrence {max} gives a non-positive logarithm base")]
    DegenerateBase { max: u64 },
    #[error("occurrence {occurrence} at position {index} gives a non-finite weight")]
    NonFinite { index: usize, occurrence: u64 },
}
