//! Concept-filtering suggestions.
//!
//! The schema is "[entity] likes these [concepts], so suggest these
//! [entities]": candidates are ranked by how similar their conceptual vector
//! is to the requester's.
//!
//! # Quick Start
//!
//! ```
//! use bildung::recommend::{Conceptual, Recommender};
//! use bildung::primitives::ConceptVector;
//!
//! struct Product {
//!     name: &'static str,
//!     concepts: ConceptVector,
//! }
//!
//! impl Conceptual for Product {
//!     fn conceptual_vector(&self) -> &ConceptVector {
//!         &self.concepts
//!     }
//! }
//!
//! let user = ConceptVector::from_dense(&[1.0, 0.5, 0.0]);
//! let products = vec![
//!     Product { name: "tent", concepts: ConceptVector::from_dense(&[0.0, 0.1, 1.0]) },
//!     Product { name: "boots", concepts: ConceptVector::from_dense(&[0.9, 0.6, 0.1]) },
//! ];
//!
//! let suggestions = Recommender::default()
//!     .suggest(&user, &products)
//!     .expect("same dimensionality");
//!
//! assert_eq!(suggestions[0].entity.name, "boots");
//! ```

mod suggestion;

pub use suggestion::{Conceptual, Suggestion};

use crate::config::SimilarityConfig;
use crate::engine::{check_lengths, defined_or_none, SimilarityEngine};
use crate::error::Result;
use crate::primitives::ConceptVector;
use tracing::{debug, instrument};

/// Ranks candidate entities by similarity to a requester.
#[derive(Debug, Clone, Default)]
pub struct Recommender {
    engine: SimilarityEngine,
}

impl Recommender {
    /// Recommender scoring with `engine`.
    #[must_use]
    pub fn new(engine: SimilarityEngine) -> Self {
        Self { engine }
    }

    /// Recommender with a validated config.
    ///
    /// # Errors
    ///
    /// Returns [`crate::BildungError::InvalidHyperparameter`] if the config
    /// is invalid.
    pub fn from_config(config: SimilarityConfig) -> Result<Self> {
        Ok(Self::new(SimilarityEngine::with_config(config)?))
    }

    /// Underlying engine.
    #[must_use]
    pub fn engine(&self) -> &SimilarityEngine {
        &self.engine
    }

    /// Suggests up to the configured limit of candidates.
    ///
    /// # Errors
    ///
    /// See [`Recommender::suggest_with_limit`].
    pub fn suggest<'a, E: Conceptual>(
        &self,
        requester: &ConceptVector,
        candidates: &'a [E],
    ) -> Result<Vec<Suggestion<'a, E>>> {
        self.suggest_with_limit(requester, candidates, self.engine.config().limit)
    }

    /// Suggests the `limit` candidates most similar to `requester`.
    ///
    /// Candidates whose similarity is undefined are left out rather than
    /// ranked last, as are candidates below the configured minimum
    /// similarity. Equal scores keep input order.
    ///
    /// # Errors
    ///
    /// - [`crate::BildungError::DimensionMismatch`] if a candidate's vector
    ///   length differs from the requester's.
    /// - [`crate::BildungError::InvalidComponent`] if a shared weight is
    ///   infinite.
    #[instrument(skip(self, requester, candidates), fields(candidates = candidates.len(), dims = requester.len()))]
    pub fn suggest_with_limit<'a, E: Conceptual>(
        &self,
        requester: &ConceptVector,
        candidates: &'a [E],
        limit: usize,
    ) -> Result<Vec<Suggestion<'a, E>>> {
        check_lengths(
            requester.len(),
            candidates.iter().map(|c| c.conceptual_vector().len()),
        )?;

        let min_similarity = self.engine.config().min_similarity;
        let mut suggestions = Vec::with_capacity(candidates.len());

        for (index, entity) in candidates.iter().enumerate() {
            let Some(score) =
                defined_or_none(self.engine.similarity(requester, entity.conceptual_vector()))?
            else {
                debug!(index, "excluding candidate with undefined similarity");
                continue;
            };

            if min_similarity.is_some_and(|min| score < min) {
                debug!(index, score, "excluding candidate below minimum similarity");
                continue;
            }

            suggestions.push(Suggestion {
                entity,
                index,
                score,
            });
        }

        // stable: ties keep input order
        suggestions.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        suggestions.truncate(limit);

        debug!(returned = suggestions.len(), "suggestions ranked");
        Ok(suggestions)
    }
}

#[cfg(test)]
#[path = "recommend_tests.rs"]
mod tests;
