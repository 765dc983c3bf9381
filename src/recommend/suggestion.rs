use crate::primitives::ConceptVector;

/// An entity that exposes per-concept weights.
pub trait Conceptual {
    /// The entity's conceptual vector.
    fn conceptual_vector(&self) -> &ConceptVector;
}

impl Conceptual for ConceptVector {
    fn conceptual_vector(&self) -> &ConceptVector {
        self
    }
}

impl<T: Conceptual + ?Sized> Conceptual for &T {
    fn conceptual_vector(&self) -> &ConceptVector {
        (**self).conceptual_vector()
    }
}

/// A ranked candidate.
#[derive(Debug)]
pub struct Suggestion<'a, E> {
    /// The suggested entity.
    pub entity: &'a E,
    /// Position of the entity in the candidate slice.
    pub index: usize,
    /// Similarity to the requester.
    pub score: f64,
}

impl<E> Clone for Suggestion<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Suggestion<'_, E> {}
