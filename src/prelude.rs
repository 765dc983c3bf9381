//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use bildung::prelude::*;
//! ```

pub use crate::config::SimilarityConfig;
pub use crate::engine::SimilarityEngine;
pub use crate::error::{BildungError, Result};
pub use crate::formulae::{cosine_similarity, pearson_similarity, Formula};
pub use crate::preprocessing::StandardScaler;
pub use crate::primitives::ConceptVector;
pub use crate::recommend::{Conceptual, Recommender, Suggestion};
