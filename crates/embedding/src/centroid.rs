//! Weighted centroid aggregation.

use crate::error::ShapeError;
use crate::vector::Vector;

/// A vector paired with its contribution weight.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedVector {
    pub vector: Vector,
    pub weight: f32,
}

impl WeightedVector {
    pub fn new(vector: Vector, weight: f32) -> Self {
        Self { vector, weight }
    }
}

/// Weighted mean of `vectors`, component by component.
///
/// `result[i] = Σ v[i]·w / Σ w`. A single vector is returned as-is and its
/// weight is ignored. Accumulation runs in `f64`.
pub fn centroid(vectors: &[Vector], weights: &[f32]) -> Result<Vector, ShapeError> {
    if vectors.is_empty() {
        return Err(ShapeError::Empty);
    }
    if vectors.len() != weights.len() {
        return Err(ShapeError::LengthMismatch {
            vectors: vectors.len(),
            weights: weights.len(),
        });
    }
    if let [only] = vectors {
        return Ok(only.clone());
    }

    let dim = vectors[0].dim();
    if let Some((index, v)) = vectors.iter().enumerate().find(|(_, v)| v.dim() != dim) {
        return Err(ShapeError::DimensionMismatch {
            index,
            expected: dim,
            found: v.dim(),
        });
    }

    let weight_sum: f64 = weights.iter().map(|&w| f64::from(w)).sum();
    if weight_sum == 0.0 || !weight_sum.is_finite() {
        return Err(ShapeError::ZeroWeightSum(weight_sum));
    }

    let mut acc = vec![0.0f64; dim];
    for (v, &w) in vectors.iter().zip(weights) {
        let w = f64::from(w);
        for (slot, &x) in acc.iter_mut().zip(v.iter()) {
            *slot += f64::from(x) * w;
        }
    }

    Ok(acc
        .into_iter()
        .map(|x| (x / weight_sum) as f32)
        .collect::<Vec<f32>>()
        .into())
}

/// [`centroid`] over pre-paired vectors and weights.
pub fn centroid_weighted(items: &[WeightedVector]) -> Result<Vector, ShapeError> {
    let (vectors, weights): (Vec<Vector>, Vec<f32>) = items
        .iter()
        .map(|item| (item.vector.clone(), item.weight))
        .unzip();
    centroid(&vectors, &weights)
}
