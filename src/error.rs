//! Error types for bildung operations.
//!
//! Every failure is surfaced as a distinct variant so that callers ranking
//! candidates can tell "no similarity" apart from "similarity undefined".

use thiserror::Error;

/// Main error type for bildung operations.
///
/// # Examples
///
/// ```
/// use bildung::error::BildungError;
///
/// let err = BildungError::DimensionMismatch {
///     expected: "3 components".to_string(),
///     actual: "2 components".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug, Error)]
pub enum BildungError {
    /// Vector lengths differ, or too few common dimensions remain after
    /// pairwise-complete filtering.
    #[error("Concept vector dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// The formula's denominator is zero, so the result is undefined.
    #[error("Similarity undefined: {reason}")]
    DivisionUndefined {
        /// Why the denominator vanished
        reason: String,
    },

    /// A non-finite component survived sparsity filtering.
    #[error("Invalid component at dimension {index}: {value}")]
    InvalidComponent {
        /// Dimension index
        index: usize,
        /// Offending value
        value: f64,
    },

    /// Invalid configuration value provided.
    #[error("Invalid hyperparameter: {param} = {value}, expected {constraint}")]
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// A transformer was used before being fitted.
    #[error("{what} is not fitted, call fit() first")]
    NotFitted {
        /// Name of the unfitted transformer
        what: &'static str,
    },

    /// Config (de)serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O error while reading a config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for BildungError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl BildungError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create an error for too few common dimensions after filtering
    #[must_use]
    pub fn insufficient_points(required: usize, found: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("at least {required} common dimensions"),
            actual: format!("{found} common dimensions"),
        }
    }

    /// Create a division-undefined error
    #[must_use]
    pub fn division_undefined(reason: impl Into<String>) -> Self {
        Self::DivisionUndefined {
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, BildungError>;
