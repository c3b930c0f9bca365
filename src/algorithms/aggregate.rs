//! Aggregation of repeated height estimates
//!
//! Independent pairwise estimates of the same landmark are reduced to a
//! single reported value: the arithmetic mean, with half the spread
//! between the largest and smallest estimate as the uncertainty bound.

use crate::core::types::Measurement;
use crate::validation::error::SurveyError;

/// Reduce a non-empty set of estimates to a mean with half-range
/// uncertainty
///
/// Deterministic and invariant under permutation of the input. A single
/// estimate aggregates to itself with zero uncertainty. Fails with
/// [`SurveyError::EmptyAggregation`] when `values` is empty.
pub fn aggregate(values: &[f64]) -> Result<Measurement, SurveyError> {
    if values.is_empty() {
        return Err(SurveyError::EmptyAggregation);
    }

    let mean = values.iter().sum::<f64>() / values.len() as f64;

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }

    Ok(Measurement::new(mean, (max - min) / 2.0))
}
