//! Logarithmic occurrence weighting.
//!
//! `weight = 2 * (1.05 - ln(o) / ln(max))`
//!
//! The most frequent term lands on `2 * 0.05`, so it is down-weighted hard
//! but still contributes. Rarer terms climb towards `2.1` on a log curve.

use crate::error::WeightError;

/// Weight assigned to a term whose occurrence equals the maximum.
pub const FREQUENCY_FLOOR: f32 = 0.1;

const FLOOR_OFFSET: f64 = 1.05;
const SCALE: f64 = 2.0;

/// Returns `(min, max)` of `input`, or `None` when it is empty.
///
/// Both ends are tracked independently on every element.
pub fn min_max(input: &[u64]) -> Option<(u64, u64)> {
    let (&first, rest) = input.split_first()?;
    let mut min = first;
    let mut max = first;
    for &curr in rest {
        if curr < min {
            min = curr;
        }
        if curr > max {
            max = curr;
        }
    }
    Some((min, max))
}

/// Map occurrence counts to weights, preserving length and order.
///
/// Empty input gives empty output. A maximum of `1` or less (log base of
/// zero or below) and any non-finite result are errors.
pub fn weights(occurrences: &[u64]) -> Result<Vec<f32>, WeightError> {
    let Some((_, max)) = min_max(occurrences) else {
        return Ok(Vec::new());
    };

    let log_max = (max as f64).ln();
    if max <= 1 || log_max <= 0.0 {
        return Err(WeightError::DegenerateBase { max });
    }

    occurrences
        .iter()
        .enumerate()
        .map(|(index, &occurrence)| {
            let weight = SCALE * (FLOOR_OFFSET - (occurrence as f64).ln() / log_max);
            if weight.is_finite() {
                Ok(weight as f32)
            } else {
                Err(WeightError::NonFinite { index, occurrence })
            }
        })
        .collect()
}
