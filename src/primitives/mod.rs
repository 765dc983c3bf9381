//! Core primitives (ConceptVector).
//!
//! Conceptual vectors are the only data the similarity formulas consume.

mod concept_vector;

pub use concept_vector::{pairwise_complete, ConceptVector};
