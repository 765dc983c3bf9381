//! Preprocessing transformers for standardizing weight sequences.
//!
//! # Example
//!
//! ```
//! use bildung::preprocessing::StandardScaler;
//!
//! let weights = [1.0, 2.0, 3.0, 4.0];
//!
//! // Standardize to zero mean and unit variance
//! let mut scaler = StandardScaler::new();
//! let scaled = scaler.fit_transform(&weights).expect("fit_transform should succeed");
//!
//! let mean: f64 = scaled.iter().sum::<f64>() / scaled.len() as f64;
//! assert!(mean.abs() < 1e-12);
//! ```

use crate::error::{BildungError, Result};
use serde::{Deserialize, Serialize};


/// Standardizes a sequence by removing the mean and scaling to unit variance.
///
/// The standard score of a sample x is: z = (x - mean) / std, with the
/// population standard deviation (divide by n).
///
/// # Example
///
/// ```
/// use bildung::preprocessing::StandardScaler;
///
/// let mut scaler = StandardScaler::new();
/// scaler.fit(&[0.0, 1.0, 2.0]).expect("non-constant sequence");
///
/// assert_eq!(scaler.mean(), Some(1.0));
/// assert!((scaler.std().unwrap_or_default() - (2.0_f64 / 3.0).sqrt()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Mean of the fitted sequence.
    mean: Option<f64>,
    /// Population standard deviation of the fitted sequence.
    std: Option<f64>,
    /// Whether to center the data (subtract mean).
    with_mean: bool,
    /// Whether to scale the data (divide by std).
    with_std: bool,
}

impl Default for StandardScaler {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardScaler {
    /// Creates a new `StandardScaler` with centering and scaling enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mean: None,
            std: None,
            with_mean: true,
            with_std: true,
        }
    }

    /// Sets whether to center the data by subtracting the mean.
    #[must_use]
    pub fn with_mean(mut self, with_mean: bool) -> Self {
        self.with_mean = with_mean;
        self
    }

    /// Sets whether to scale the data by dividing by standard deviation.
    #[must_use]
    pub fn with_std(mut self, with_std: bool) -> Self {
        self.with_std = with_std;
        self
    }

    /// Fitted mean, if any.
    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        self.mean
    }

    /// Fitted standard deviation, if any.
    #[must_use]
    pub fn std(&self) -> Option<f64> {
        self.std
    }

    /// Returns true if the scaler has been fitted.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.mean.is_some()
    }

    /// Computes the mean and standard deviation of `x`.
    ///
    /// # Errors
    ///
    /// - [`BildungError::DimensionMismatch`] if `x` is empty.
    /// - [`BildungError::DivisionUndefined`] if scaling is enabled and `x`
    ///   has zero variance.
    pub fn fit(&mut self, x: &[f64]) -> Result<()> {
        if x.is_empty() {
            return Err(BildungError::dimension_mismatch("sequence length", 1, 0));
        }

        let n = x.len() as f64;
        let mean = x.iter().sum::<f64>() / n;
        let sum_sq: f64 = x.iter().map(|&v| (v - mean) * (v - mean)).sum();
        let std = (sum_sq / n).sqrt();

        if self.with_std && is_zero_variance(x.len(), mean, std) {
            return Err(BildungError::division_undefined(
                "cannot standardize a sequence with zero variance",
            ));
        }

        self.mean = Some(mean);
        self.std = Some(std);

        Ok(())
    }

    /// Standardizes `x` with the fitted mean and std.
    ///
    /// # Errors
    ///
    /// Returns [`BildungError::NotFitted`] if `fit` has not succeeded.
    pub fn transform(&self, x: &[f64]) -> Result<Vec<f64>> {
        let (Some(mean), Some(std)) = (self.mean, self.std) else {
            return Err(BildungError::NotFitted {
                what: "StandardScaler",
            });
        };

        Ok(x.iter()
            .map(|&v| {
                let mut val = v;
                if self.with_mean {
                    val -= mean;
                }
                if self.with_std {
                    val /= std;
                }
                val
            })
            .collect())
    }

    /// Fits to `x`, then standardizes it.
    ///
    /// # Errors
    ///
    /// Same as [`StandardScaler::fit`].
    pub fn fit_transform(&mut self, x: &[f64]) -> Result<Vec<f64>> {
        self.fit(x)?;
        self.transform(x)
    }
}

/// Standard-scales a sequence to zero mean and unit variance.
///
/// # Errors
///
/// See [`StandardScaler::fit`].
///
/// # Example
///
/// ```
/// use bildung::preprocessing::standard_scale;
///
/// let z = standard_scale(&[2.0, 4.0]).expect("non-constant");
/// assert_eq!(z, vec![-1.0, 1.0]);
/// ```
pub fn standard_scale(x: &[f64]) -> Result<Vec<f64>> {
    StandardScaler::new().fit_transform(x)
}

/// A constant sequence can still show a spread of a few ulps of its mean,
/// left over from rounding the mean itself. Anything within that is zero.
fn is_zero_variance(n: usize, mean: f64, std: f64) -> bool {
    std == 0.0 || std <= n as f64 * f64::EPSILON * mean.abs()
}
