//! Sparse-aware conceptual vectors.

use crate::error::{BildungError, Result};
use serde::{Deserialize, Serialize};

/// Per-concept weights of an entity, one component per tag dimension.
///
/// A component may be absent (`None`). Absent components are excluded from
/// comparisons instead of being read as zero, which would shrink magnitudes
/// and skew scores for vectors with many gaps.
///
/// `NaN` is treated as absent on construction.
///
/// # Examples
///
/// ```
/// use bildung::primitives::ConceptVector;
///
/// let v = ConceptVector::from_options(vec![Some(1.0), None, Some(3.0)]);
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.present_count(), 2);
/// assert_eq!(v.get(1), None);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Option<f64>>", into = "Vec<Option<f64>>")]
pub struct ConceptVector {
    components: Vec<Option<f64>>,
}

impl ConceptVector {
    /// Creates a fully populated vector from a slice of weights.
    #[must_use]
    pub fn from_dense(values: &[f64]) -> Self {
        values.iter().copied().collect()
    }

    /// Creates a vector from possibly-absent weights.
    #[must_use]
    pub fn from_options(components: Vec<Option<f64>>) -> Self {
        components.into_iter().collect()
    }

    /// Number of dimensions, absent ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns true if the vector has no dimensions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Weight at dimension `index`, or `None` if absent or out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.components.get(index).copied().flatten()
    }

    /// Number of dimensions that carry a value.
    #[must_use]
    pub fn present_count(&self) -> usize {
        self.components.iter().filter(|c| c.is_some()).count()
    }

    /// Returns true if no component is absent.
    #[must_use]
    pub fn is_dense(&self) -> bool {
        self.components.iter().all(Option::is_some)
    }

    /// Iterates over the components in dimension order.
    pub fn iter(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.components.iter().copied()
    }

    /// Raw components.
    #[must_use]
    pub fn as_slice(&self) -> &[Option<f64>] {
        &self.components
    }
}

impl FromIterator<Option<f64>> for ConceptVector {
    fn from_iter<I: IntoIterator<Item = Option<f64>>>(iter: I) -> Self {
        Self {
            components: iter
                .into_iter()
                .map(|c| c.filter(|v| !v.is_nan()))
                .collect(),
        }
    }
}

impl FromIterator<f64> for ConceptVector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        iter.into_iter().map(Some).collect()
    }
}

impl From<Vec<f64>> for ConceptVector {
    fn from(values: Vec<f64>) -> Self {
        values.into_iter().collect()
    }
}

impl From<Vec<Option<f64>>> for ConceptVector {
    fn from(components: Vec<Option<f64>>) -> Self {
        Self::from_options(components)
    }
}

impl From<ConceptVector> for Vec<Option<f64>> {
    fn from(vector: ConceptVector) -> Self {
        vector.components
    }
}

/// Reduces two vectors to the dimensions where both carry a value.
///
/// Returns the surviving weights of `a` and `b` as dense sequences, in
/// dimension order.
///
/// # Errors
///
/// - [`BildungError::DimensionMismatch`] if the vectors differ in length.
/// - [`BildungError::InvalidComponent`] if a surviving weight is infinite.
///
/// # Examples
///
/// ```
/// use bildung::primitives::{pairwise_complete, ConceptVector};
///
/// let a = ConceptVector::from_options(vec![Some(1.0), None, Some(3.0)]);
/// let b = ConceptVector::from_options(vec![Some(2.0), Some(5.0), None]);
///
/// let (ra, rb) = pairwise_complete(&a, &b).expect("equal lengths");
/// assert_eq!(ra, vec![1.0]);
/// assert_eq!(rb, vec![2.0]);
/// ```
pub fn pairwise_complete(a: &ConceptVector, b: &ConceptVector) -> Result<(Vec<f64>, Vec<f64>)> {
    if a.len() != b.len() {
        return Err(BildungError::DimensionMismatch {
            expected: format!("{} components", a.len()),
            actual: format!("{} components", b.len()),
        });
    }

    let mut left = Vec::with_capacity(a.len());
    let mut right = Vec::with_capacity(b.len());

    for (index, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let (Some(x), Some(y)) = (x, y) else {
            continue;
        };
        for value in [x, y] {
            if !value.is_finite() {
                return Err(BildungError::InvalidComponent { index, value });
            }
        }
        left.push(x);
        right.push(y);
    }

    Ok((left, right))
}

#[cfg(test)]
#[path = "concept_vector_tests.rs"]
mod tests;
