//! Similarity scoring under a configured formula.
//!
//! # Quick Start
//!
//! ```
//! use bildung::config::SimilarityConfig;
//! use bildung::engine::SimilarityEngine;
//! use bildung::formulae::Formula;
//! use bildung::primitives::ConceptVector;
//!
//! let engine = SimilarityEngine::with_config(
//!     SimilarityConfig::new().with_formula(Formula::Pearson).with_precision(3),
//! )
//! .expect("valid config");
//!
//! let a = ConceptVector::from_dense(&[1.0, 0.5, 0.5]);
//! let b = ConceptVector::from_dense(&[1.0, 0.5, 0.25]);
//!
//! assert_eq!(engine.similarity(&a, &b).expect("defined"), 0.945);
//! assert_eq!(engine.cosine(&a, &b).expect("defined"), 0.98);
//! ```

use crate::config::SimilarityConfig;
use crate::error::{BildungError, Result};
use crate::formulae::Formula;
use crate::primitives::ConceptVector;
use tracing::{debug, instrument, trace};

/// Computes similarity scores for pairs of conceptual vectors.
///
/// Holds no state beyond its config; every call is pure.
#[derive(Debug, Clone, Default)]
pub struct SimilarityEngine {
    config: SimilarityConfig,
}

impl SimilarityEngine {
    /// Engine with the default config (cosine, 5 digits).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a validated config.
    ///
    /// # Errors
    ///
    /// Returns [`BildungError::InvalidHyperparameter`] if the config is invalid.
    pub fn with_config(config: SimilarityConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active config.
    #[must_use]
    pub fn config(&self) -> &SimilarityConfig {
        &self.config
    }

    /// Scores `a` against `b` with the configured formula.
    ///
    /// # Errors
    ///
    /// See [`Formula::compute`].
    pub fn similarity(&self, a: &ConceptVector, b: &ConceptVector) -> Result<f64> {
        self.score(self.config.formula, a, b)
    }

    /// Scores `a` against `b` with an explicit formula and the configured
    /// precision.
    ///
    /// # Errors
    ///
    /// See [`Formula::compute`].
    pub fn score(&self, formula: Formula, a: &ConceptVector, b: &ConceptVector) -> Result<f64> {
        let score = formula.compute(a, b, self.config.precision)?;
        trace!(%formula, score, "scored pair");
        Ok(score)
    }

    /// Cosine similarity at the configured precision.
    ///
    /// # Errors
    ///
    /// See [`crate::formulae::cosine_similarity`].
    pub fn cosine(&self, a: &ConceptVector, b: &ConceptVector) -> Result<f64> {
        self.score(Formula::Cosine, a, b)
    }

    /// Pearson similarity at the configured precision.
    ///
    /// # Errors
    ///
    /// See [`crate::formulae::pearson_similarity`].
    pub fn pearson(&self, a: &ConceptVector, b: &ConceptVector) -> Result<f64> {
        self.score(Formula::Pearson, a, b)
    }

    /// Symmetric matrix of similarities between every pair of `vectors`.
    ///
    /// Entry (i, j) is `None` when the similarity of that pair is undefined.
    /// Only the upper triangle is computed.
    ///
    /// # Errors
    ///
    /// - [`BildungError::DimensionMismatch`] if the vectors differ in length.
    /// - [`BildungError::InvalidComponent`] if a shared weight is infinite.
    ///
    /// # Examples
    ///
    /// ```
    /// use bildung::engine::SimilarityEngine;
    /// use bildung::primitives::ConceptVector;
    ///
    /// let vectors = vec![
    ///     ConceptVector::from_dense(&[1.0, 2.0, 3.0]),
    ///     ConceptVector::from_dense(&[2.0, 3.0, 4.0]),
    ///     ConceptVector::from_dense(&[0.0, 0.0, 0.0]),
    /// ];
    ///
    /// let matrix = SimilarityEngine::new().pairwise(&vectors).expect("same lengths");
    /// assert_eq!(matrix[0][0], Some(1.0));
    /// assert_eq!(matrix[0][1], matrix[1][0]);
    /// assert_eq!(matrix[2][0], None);
    /// ```
    #[instrument(skip(self, vectors), fields(n = vectors.len(), formula = %self.config.formula))]
    pub fn pairwise(&self, vectors: &[ConceptVector]) -> Result<Vec<Vec<Option<f64>>>> {
        let n = vectors.len();
        if let Some(first) = vectors.first() {
            check_lengths(first.len(), vectors.iter().map(ConceptVector::len))?;
        }

        let mut matrix = vec![vec![None; n]; n];
        for i in 0..n {
            for j in i..n {
                let sim = defined_or_none(self.similarity(&vectors[i], &vectors[j]))?;
                if sim.is_none() {
                    debug!(i, j, "similarity undefined for pair");
                }
                matrix[i][j] = sim;
                matrix[j][i] = sim;
            }
        }

        Ok(matrix)
    }
}

/// Fails if any length in `lengths` differs from `expected`.
pub(crate) fn check_lengths(expected: usize, lengths: impl Iterator<Item = usize>) -> Result<()> {
    for (index, len) in lengths.enumerate() {
        if len != expected {
            return Err(BildungError::dimension_mismatch(
                &format!("vector[{index}] length"),
                expected,
                len,
            ));
        }
    }
    Ok(())
}

/// Maps "undefined for this pair" to `None` once lengths are known to match.
pub(crate) fn defined_or_none(result: Result<f64>) -> Result<Option<f64>> {
    match result {
        Ok(score) => Ok(Some(score)),
        Err(BildungError::DivisionUndefined { .. } | BildungError::DimensionMismatch { .. }) => {
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
