//! Bildung: concept-filtering (tag based) similarity and suggestions.
//!
//! Entities such as users and products carry a conceptual vector, one
//! weight per tag. Bildung scores how alike two such vectors are and ranks
//! candidate entities for a requester.
//!
//! # Quick Start
//!
//! ```
//! use bildung::prelude::*;
//!
//! let user = ConceptVector::from_options(vec![Some(1.0), Some(0.5), None]);
//! let product = ConceptVector::from_dense(&[1.0, 0.5, 0.25]);
//!
//! // Dimension 2 is missing for the user, so both formulas ignore it.
//! let cos = cosine_similarity(&user, &product, 5).expect("defined");
//! assert_eq!(cos, 1.0);
//!
//! let err = pearson_similarity(
//!     &ConceptVector::from_dense(&[2.0, 2.0]),
//!     &ConceptVector::from_dense(&[1.0, 3.0]),
//!     5,
//! )
//! .unwrap_err();
//! assert!(matches!(err, BildungError::DivisionUndefined { .. }));
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: `ConceptVector` and pairwise-complete filtering
//! - [`formulae`]: cosine and Pearson similarity, rounding
//! - [`preprocessing`]: standard scaling
//! - [`engine`]: `SimilarityEngine` and pairwise matrices
//! - [`recommend`]: ranking candidate entities
//! - [`config`]: `SimilarityConfig`

pub mod config;
pub mod engine;
pub mod error;
pub mod formulae;
pub mod prelude;
pub mod preprocessing;
pub mod primitives;
pub mod recommend;

pub use error::{BildungError, Result};
pub use primitives::ConceptVector;
