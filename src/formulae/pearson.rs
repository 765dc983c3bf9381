//! Correlation-based similarity.

use super::{rescale, round_to, Formula};
use crate::error::{BildungError, Result};
use crate::preprocessing::standard_scale;
use crate::primitives::{pairwise_complete, ConceptVector};

/// Pearson-r similarity between two conceptual vectors.
///
/// Both vectors are reduced to their common dimensions, standard-scaled,
/// and correlated. Unlike cosine, this removes the shared mean and scale
/// trend, so it also stays put under `k·B + c` for `k > 0`.
///
/// # Formula
/// ```text
/// r(A, B) = (1/n) Σ z(A)_i · z(B)_i,   z(X) = (X - mean(X)) / std(X)
/// ```
///
/// # Errors
///
/// - [`BildungError::DimensionMismatch`] if the vectors differ in length or
///   fewer than 2 common dimensions remain.
/// - [`BildungError::DivisionUndefined`] if either reduced vector is constant.
/// - [`BildungError::InvalidComponent`] if a surviving weight is infinite.
///
/// # Examples
///
/// ```
/// use bildung::formulae::pearson_similarity;
/// use bildung::primitives::ConceptVector;
///
/// let a = ConceptVector::from_dense(&[1.0, 2.0, 3.0, 4.0]);
/// let b = ConceptVector::from_dense(&[2.0, 1.0, 4.0, 3.0]);
///
/// let r = pearson_similarity(&a, &b, 5).expect("defined");
/// assert_eq!(r, 0.6);
/// ```
pub fn pearson_similarity(a: &ConceptVector, b: &ConceptVector, precision: u32) -> Result<f64> {
    let (a, b) = pairwise_complete(a, b)?;
    let raw = pearson_dense(&a, &b)?;
    Ok(round_to(raw, precision))
}

/// Unrounded Pearson r over already-filtered dense sequences.
pub(crate) fn pearson_dense(a: &[f64], b: &[f64]) -> Result<f64> {
    let required = Formula::Pearson.min_points();
    if a.len() < required {
        return Err(BildungError::insufficient_points(required, a.len()));
    }

    let zero_variance = || BildungError::division_undefined("vector has zero variance");
    let za = standard_scale(&rescale(a).ok_or_else(zero_variance)?)?;
    let zb = standard_scale(&rescale(b).ok_or_else(zero_variance)?)?;

    let n = za.len() as f64;
    let r = za.iter().zip(&zb).map(|(x, y)| x * y).sum::<f64>() / n;

    Ok(r.clamp(-1.0, 1.0))
}
