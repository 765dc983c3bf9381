//! Similarity formulas over conceptual vectors.
//!
//! - Cosine similarity (directional alignment, scale invariant)
//! - Pearson correlation (linear co-trend, scale and shift invariant)
//!
//! Both apply pairwise-complete filtering: a dimension missing from either
//! vector is dropped from both before anything is computed.
//!
//! # Quick Start
//!
//! ```
//! use bildung::formulae::{cosine_similarity, pearson_similarity, Formula};
//! use bildung::primitives::ConceptVector;
//!
//! let a = ConceptVector::from_dense(&[1.0, 0.5, 0.5]);
//! let b = ConceptVector::from_dense(&[1.0, 0.5, 0.25]);
//!
//! let cos = cosine_similarity(&a, &b, 5).expect("defined");
//! let r = pearson_similarity(&a, &b, 5).expect("defined");
//! assert!(r < cos);
//!
//! assert_eq!(Formula::Pearson.compute(&a, &b, 5).expect("defined"), r);
//! ```

mod cosine;
mod pearson;

pub use cosine::cosine_similarity;
pub use pearson::pearson_similarity;

use crate::error::{BildungError, Result};
use crate::primitives::ConceptVector;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rounding precision used when none is configured.
pub const DEFAULT_PRECISION: u32 = 5;

/// Largest precision that still changes an f64.
pub const MAX_PRECISION: u32 = 15;

/// The similarity formulas this crate knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formula {
    /// Normalized dot product.
    #[default]
    Cosine,
    /// Pearson product-moment correlation of the standardized vectors.
    Pearson,
}

impl Formula {
    /// Every formula, in declaration order.
    pub const ALL: [Formula; 2] = [Formula::Cosine, Formula::Pearson];

    /// Scores `a` against `b` and rounds to `precision` digits.
    ///
    /// # Errors
    ///
    /// See [`cosine_similarity`] and [`pearson_similarity`].
    pub fn compute(self, a: &ConceptVector, b: &ConceptVector, precision: u32) -> Result<f64> {
        match self {
            Formula::Cosine => cosine_similarity(a, b, precision),
            Formula::Pearson => pearson_similarity(a, b, precision),
        }
    }

    /// Minimum number of common dimensions for a defined result.
    #[must_use]
    pub fn min_points(self) -> usize {
        match self {
            Formula::Cosine => 1,
            Formula::Pearson => 2,
        }
    }

    /// Lowercase name, as used in config files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Formula::Cosine => "cosine",
            Formula::Pearson => "pearson",
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Formula {
    type Err = BildungError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cosine" => Ok(Formula::Cosine),
            "pearson" => Ok(Formula::Pearson),
            _ => Err(BildungError::InvalidHyperparameter {
                param: "formula".to_string(),
                value: s.to_string(),
                constraint: "one of: cosine, pearson".to_string(),
            }),
        }
    }
}

/// Rounds half away from zero to `precision` decimal digits.
///
/// Precisions above [`MAX_PRECISION`] return `value` untouched.
///
/// # Examples
///
/// ```
/// use bildung::formulae::round_to;
///
/// assert_eq!(round_to(0.979957887, 5), 0.97996);
/// assert_eq!(round_to(0.5, 0), 1.0);
/// assert_eq!(round_to(-0.5, 0), -1.0);
/// ```
#[must_use]
pub fn round_to(value: f64, precision: u32) -> f64 {
    if precision > MAX_PRECISION || !value.is_finite() {
        return value;
    }
    // precision <= 15 here, the cast cannot truncate
    let factor = 10_f64.powi(precision as i32);
    (value * factor).round() / factor
}

/// Scales `x` by a power of two so its largest absolute weight lands in
/// `[1, 2)`, or `None` if all weights are zero.
///
/// Both formulas are scale invariant, so this only keeps intermediate
/// squares away from overflow and underflow. Multiplying by a power of two
/// is exact, so the spread of weights sitting on a large offset survives.
pub(crate) fn rescale(x: &[f64]) -> Option<Vec<f64>> {
    let max_abs = x.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if max_abs == 0.0 {
        return None;
    }
    // unbiased binary exponent; subnormals clamp to the smallest normal one
    let exponent = ((max_abs.to_bits() >> 52) & 0x7ff) as i32 - 1023;
    let scale = 2_f64.powi(-exponent.clamp(-1022, 1023));
    Some(x.iter().map(|v| v * scale).collect())
}

#[cfg(test)]
#[path = "formulae_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "formulae_contract_falsify.rs"]
mod formulae_contract_falsify;
