//! Prefix selection policy

use crate::FormError;

/// Magnitude range a displayed mantissa should fall into
///
/// The formatter picks the largest prefix whose mantissa satisfies
/// `min_mantissa <= |mantissa| < max_mantissa`.
///
/// # Examples
///
/// ```
/// use partdb_forms::PrefixPolicy;
///
/// let policy = PrefixPolicy::default();
/// assert!(policy.fits(3.3));
/// assert!(!policy.fits(1000.0));
///
/// assert!(PrefixPolicy::new(10.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrefixPolicy {
    min_mantissa: f64,
    max_mantissa: f64,
}

impl PrefixPolicy {
    /// Lower bound of the default range (inclusive)
    pub const DEFAULT_MIN: f64 = 1.0;

    /// Upper bound of the default range (exclusive)
    pub const DEFAULT_MAX: f64 = 1000.0;

    /// Create a policy with a custom range
    pub fn new(min_mantissa: f64, max_mantissa: f64) -> Result<Self, FormError> {
        if !min_mantissa.is_finite() || !max_mantissa.is_finite() {
            return Err(FormError::InvalidOption(format!(
                "prefix policy bounds must be finite, got [{}, {})",
                min_mantissa, max_mantissa
            )));
        }
        if min_mantissa <= 0.0 {
            return Err(FormError::InvalidOption(format!(
                "min_mantissa must be greater than zero, got {}",
                min_mantissa
            )));
        }
        if max_mantissa <= min_mantissa {
            return Err(FormError::InvalidOption(format!(
                "max_mantissa {} must be greater than min_mantissa {}",
                max_mantissa, min_mantissa
            )));
        }

        Ok(Self {
            min_mantissa,
            max_mantissa,
        })
    }

    /// Inclusive lower bound
    pub fn min_mantissa(&self) -> f64 {
        self.min_mantissa
    }

    /// Exclusive upper bound
    pub fn max_mantissa(&self) -> f64 {
        self.max_mantissa
    }

    /// Whether a mantissa lies in the display range
    pub fn fits(&self, mantissa: f64) -> bool {
        let magnitude = mantissa.abs();
        magnitude >= self.min_mantissa && magnitude < self.max_mantissa
    }
}

impl Default for PrefixPolicy {
    fn default() -> Self {
        Self {
            min_mantissa: Self::DEFAULT_MIN,
            max_mantissa: Self::DEFAULT_MAX,
        }
    }
}
