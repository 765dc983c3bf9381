//! Cosine-based similarity.

use super::{rescale, round_to, Formula};
use crate::error::{BildungError, Result};
use crate::primitives::{pairwise_complete, ConceptVector};

/// Cosine similarity between two conceptual vectors.
///
/// Dimensions missing from either vector are dropped from both before the
/// dot product and magnitudes are taken.
///
/// # Formula
/// ```text
/// cosine_sim(A, B) = (A · B) / (||A|| * ||B||)
/// ```
///
/// # Errors
///
/// - [`BildungError::DimensionMismatch`] if the vectors differ in length.
/// - [`BildungError::DivisionUndefined`] if no common dimension remains or
///   either reduced vector has zero norm.
/// - [`BildungError::InvalidComponent`] if a surviving weight is infinite.
///
/// # Examples
///
/// ```
/// use bildung::formulae::cosine_similarity;
/// use bildung::primitives::ConceptVector;
///
/// let user = ConceptVector::from_dense(&[1.0, 0.5, 0.5]);
/// let product = ConceptVector::from_dense(&[1.0, 0.5, 0.25]);
///
/// let sim = cosine_similarity(&user, &product, 5).expect("defined");
/// assert_eq!(sim, 0.97996);
/// ```
pub fn cosine_similarity(a: &ConceptVector, b: &ConceptVector, precision: u32) -> Result<f64> {
    let (a, b) = pairwise_complete(a, b)?;
    let raw = cosine_dense(&a, &b)?;
    Ok(round_to(raw, precision))
}

/// Unrounded cosine over already-filtered dense sequences.
pub(crate) fn cosine_dense(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() < Formula::Cosine.min_points() {
        return Err(BildungError::division_undefined(
            "no common dimensions between vectors",
        ));
    }

    let zero_norm = || BildungError::division_undefined("vector has zero norm");
    let a = rescale(a).ok_or_else(zero_norm)?;
    let b = rescale(b).ok_or_else(zero_norm)?;

    let dot_product: f64 = a.iter().zip(&b).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    Ok((dot_product / (norm_a * norm_b)).clamp(-1.0, 1.0))
}
