//! Similarity and suggestion settings.
//!
//! # Example
//!
//! ```
//! use bildung::config::SimilarityConfig;
//! use bildung::formulae::Formula;
//!
//! let config = SimilarityConfig::from_json_str(r#"{ "formula": "pearson", "limit": 3 }"#)
//!     .expect("valid config");
//!
//! assert_eq!(config.formula, Formula::Pearson);
//! assert_eq!(config.precision, 5);
//! assert_eq!(config.limit, 3);
//! ```

use crate::error::{BildungError, Result};
use crate::formulae::{Formula, DEFAULT_PRECISION, MAX_PRECISION};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default number of suggestions returned.
pub const DEFAULT_LIMIT: usize = 10;

/// Settings shared by the similarity engine and the recommender.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Formula used by [`crate::engine::SimilarityEngine::similarity`].
    pub formula: Formula,
    /// Decimal digits kept in every score.
    pub precision: u32,
    /// Candidates scoring below this are never suggested.
    pub min_similarity: Option<f64>,
    /// Maximum number of suggestions.
    pub limit: usize,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            formula: Formula::default(),
            precision: DEFAULT_PRECISION,
            min_similarity: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl SimilarityConfig {
    /// Creates the default config: cosine, 5 digits, no threshold, limit 10.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the formula.
    #[must_use]
    pub fn with_formula(mut self, formula: Formula) -> Self {
        self.formula = formula;
        self
    }

    /// Sets the rounding precision.
    #[must_use]
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Sets the minimum similarity a suggestion must reach.
    #[must_use]
    pub fn with_min_similarity(mut self, min_similarity: f64) -> Self {
        self.min_similarity = Some(min_similarity);
        self
    }

    /// Sets the default number of suggestions.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Checks every field against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns [`BildungError::InvalidHyperparameter`] if `precision` exceeds
    /// 15 or `min_similarity` is NaN or outside [-1, 1].
    pub fn validate(&self) -> Result<()> {
        if self.precision > MAX_PRECISION {
            return Err(BildungError::InvalidHyperparameter {
                param: "precision".to_string(),
                value: self.precision.to_string(),
                constraint: format!("<= {MAX_PRECISION}"),
            });
        }

        if let Some(min) = self.min_similarity {
            if !(-1.0..=1.0).contains(&min) {
                return Err(BildungError::InvalidHyperparameter {
                    param: "min_similarity".to_string(),
                    value: min.to_string(),
                    constraint: "within [-1, 1]".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Parses and validates a JSON config. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BildungError::Serialization`] on malformed JSON, or any
    /// error from [`SimilarityConfig::validate`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns [`BildungError::Io`] if the file cannot be read, otherwise
    /// the errors of [`SimilarityConfig::from_json_str`].
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Serializes the config to pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns [`BildungError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
