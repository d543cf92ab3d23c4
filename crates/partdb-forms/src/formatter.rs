//! SI formatter service
//!
//! Splits raw values into a mantissa and an SI prefix, recombines them, and
//! formats or parses prefixed strings such as `"3.3 kΩ"`.

use crate::{FormError, PrefixPolicy};
use partdb_domain::SiPrefix;
use tracing::debug;

/// A value split into mantissa and prefix
///
/// `value * 10^prefix.exponent()` is the raw value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiValue {
    /// Scaled mantissa
    pub value: f64,

    /// Chosen prefix
    pub prefix: SiPrefix,
}

impl SiValue {
    /// Magnitude of the chosen prefix (its power of ten)
    pub fn prefix_magnitude(&self) -> i32 {
        self.prefix.exponent()
    }
}

/// Stateless SI conversion service
#[derive(Debug, Clone, Copy, Default)]
pub struct SiFormatter {
    policy: PrefixPolicy,
}

impl SiFormatter {
    /// Create a formatter using the given prefix policy
    pub fn new(policy: PrefixPolicy) -> Self {
        Self { policy }
    }

    /// Active prefix policy
    pub fn policy(&self) -> &PrefixPolicy {
        &self.policy
    }

    /// Split a raw value into mantissa and prefix
    ///
    /// The largest prefix whose mantissa fits the policy range wins. When no
    /// prefix fits (zero, non-finite input, or a magnitude outside the
    /// micro..mega range) the value is returned unscaled with no prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use partdb_domain::SiPrefix;
    /// use partdb_forms::SiFormatter;
    ///
    /// let formatter = SiFormatter::default();
    /// let split = formatter.convert_value(3300.0);
    /// assert_eq!(split.value, 3.3);
    /// assert_eq!(split.prefix, SiPrefix::Kilo);
    /// ```
    pub fn convert_value(&self, value: f64) -> SiValue {
        if value.is_finite() && value != 0.0 {
            for prefix in SiPrefix::ALL {
                let mantissa = scale_down(value, prefix);
                if self.policy.fits(mantissa) {
                    return SiValue {
                        value: mantissa,
                        prefix,
                    };
                }
            }
            debug!(value, "No SI prefix fits, keeping unscaled value");
        }

        SiValue {
            value,
            prefix: SiPrefix::None,
        }
    }

    /// Recombine a mantissa and a prefix into the raw value
    pub fn combine(&self, mantissa: f64, prefix: SiPrefix) -> f64 {
        scale_up(mantissa, prefix)
    }

    /// Format a value with the best fitting prefix
    ///
    /// The mantissa is rounded to `decimals` places with trailing zeros
    /// removed. A mantissa that rounds up to the policy maximum moves to the
    /// next larger prefix, so `999.999` prints as `1 k` rather than `1000`.
    ///
    /// # Examples
    ///
    /// ```
    /// use partdb_forms::SiFormatter;
    ///
    /// let formatter = SiFormatter::default();
    /// assert_eq!(formatter.format(3300.0, Some("Ω"), 2), "3.3 kΩ");
    /// assert_eq!(formatter.format(42.0, None, 2), "42");
    /// ```
    pub fn format(&self, value: f64, unit: Option<&str>, decimals: usize) -> String {
        let mut split = self.convert_value(value);
        let mut rounded = format!("{:.*}", decimals, split.value);

        if self.policy.fits(split.value) {
            let overflows = rounded
                .parse::<f64>()
                .map(|r| r.abs() >= self.policy.max_mantissa())
                .unwrap_or(false);
            if let Some(larger) = split.prefix.larger().filter(|_| overflows) {
                split = SiValue {
                    value: scale_down(value, larger),
                    prefix: larger,
                };
                rounded = format!("{:.*}", decimals, split.value);
            }
        }

        let number = trim_decimals(&rounded);
        let suffix = format!("{}{}", split.prefix.symbol(), unit.unwrap_or(""));

        if suffix.is_empty() {
            number
        } else {
            format!("{} {}", number, suffix)
        }
    }

    /// Parse a prefixed string such as `"3.3 k"` or `"4.7µF"`
    ///
    /// When `unit` is given, a trailing unit symbol is stripped before the
    /// prefix is read, so `"5 m"` with unit `m` means five meters.
    ///
    /// # Examples
    ///
    /// ```
    /// use partdb_forms::SiFormatter;
    ///
    /// let formatter = SiFormatter::default();
    /// assert_eq!(formatter.parse("3.3 k", None).unwrap(), 3300.0);
    /// assert_eq!(formatter.parse("5 m", Some("m")).unwrap(), 5.0);
    /// ```
    pub fn parse(&self, input: &str, unit: Option<&str>) -> Result<f64, FormError> {
        let mut text = input.trim();
        if let Some(unit) = unit.filter(|u| !u.is_empty()) {
            text = text.strip_suffix(unit).unwrap_or(text).trim_end();
        }

        if let Ok(value) = text.parse::<f64>() {
            return finite(value, input);
        }

        let symbol = match text.chars().last() {
            Some(c) => c,
            None => return Err(FormError::InvalidNumber(input.to_string())),
        };
        let number = text[..text.len() - symbol.len_utf8()].trim_end();
        let mantissa = number
            .parse::<f64>()
            .map_err(|_| FormError::InvalidNumber(input.to_string()))?;
        let mantissa = finite(mantissa, input)?;

        let prefix = SiPrefix::from_symbol(&symbol.to_string())
            .ok_or_else(|| FormError::UnknownPrefix(symbol.to_string()))?;

        Ok(self.combine(mantissa, prefix))
    }
}

/// Divide by the prefix multiplier
///
/// Negative exponents multiply by the positive power of ten instead of
/// dividing by an inexact fraction, mirroring `scale_up`.
fn scale_down(value: f64, prefix: SiPrefix) -> f64 {
    let exponent = prefix.exponent();
    if exponent >= 0 {
        value / 10f64.powi(exponent)
    } else {
        value * 10f64.powi(-exponent)
    }
}

/// Multiply by the prefix multiplier
fn scale_up(value: f64, prefix: SiPrefix) -> f64 {
    let exponent = prefix.exponent();
    if exponent >= 0 {
        value * 10f64.powi(exponent)
    } else {
        value / 10f64.powi(-exponent)
    }
}

fn finite(value: f64, input: &str) -> Result<f64, FormError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FormError::InvalidNumber(input.to_string()))
    }
}

fn trim_decimals(number: &str) -> String {
    if !number.contains('.') {
        return number.to_string();
    }
    let trimmed = number.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
