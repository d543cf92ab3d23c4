//! SI unit field configuration
//!
//! Options are resolved once, before the field is constructed. Options that
//! depend on the measurement unit (`show_prefix`, `is_integer`, `unit`) are
//! derived from it unless set explicitly.

use crate::{FormError, PrefixPolicy};
use partdb_domain::MeasurementUnit;
use std::fmt;
use tracing::debug;

/// Step constraint of the numeric input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Any value allowed
    Any,

    /// Values must be multiples of the given step
    Value(f64),
}

impl Step {
    /// Step for integer-only inputs
    pub const INTEGER: Step = Step::Value(1.0);
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Any => f.write_str("any"),
            Step::Value(step) => write!(f, "{}", step),
        }
    }
}

/// Resolved configuration of an SI unit field
#[derive(Debug, Clone, PartialEq)]
pub struct SiUnitOptions {
    /// Unit the options were derived from, if any
    pub measurement_unit: Option<MeasurementUnit>,

    /// Render the prefix selector
    pub show_prefix: bool,

    /// Only integers are accepted
    pub is_integer: bool,

    /// Display symbol of the unit
    pub unit: Option<String>,

    /// Lower limit of the numeric input
    pub min: Option<f64>,

    /// Upper limit of the numeric input
    pub max: Option<f64>,

    /// Step of the numeric input
    pub step: Step,

    /// Render the mantissa as an HTML5 number input
    pub html5: bool,

    /// Prefix selection policy used when splitting values
    pub prefix_policy: PrefixPolicy,
}

impl SiUnitOptions {
    /// Start building options
    pub fn builder() -> SiUnitOptionsBuilder {
        SiUnitOptionsBuilder::default()
    }

    /// Resolve options from a measurement unit with all other options at
    /// their defaults
    pub fn from_unit(unit: MeasurementUnit) -> Result<Self, FormError> {
        Self::builder().measurement_unit(unit).resolve()
    }
}

/// Builder collecting explicit options before resolution
///
/// # Examples
///
/// ```
/// use partdb_domain::MeasurementUnit;
/// use partdb_forms::{SiUnitOptions, Step};
///
/// let pieces = MeasurementUnit::new("Pieces", None).integer(true);
/// let options = SiUnitOptions::builder().measurement_unit(pieces).resolve()?;
/// assert!(!options.show_prefix);
/// assert_eq!(options.step, Step::INTEGER);
///
/// // Without a measurement unit the display unit must be given explicitly
/// assert!(SiUnitOptions::builder().resolve().is_err());
/// # Ok::<(), partdb_forms::FormError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SiUnitOptionsBuilder {
    measurement_unit: Option<MeasurementUnit>,
    show_prefix: Option<bool>,
    is_integer: Option<bool>,
    unit: Option<Option<String>>,
    min: Option<Option<f64>>,
    max: Option<Option<f64>>,
    step: Option<Step>,
    html5: Option<bool>,
    prefix_policy: Option<PrefixPolicy>,
}

impl SiUnitOptionsBuilder {
    /// Derive defaults from a measurement unit
    pub fn measurement_unit(mut self, unit: MeasurementUnit) -> Self {
        self.measurement_unit = Some(unit);
        self
    }

    /// Override whether the prefix selector is shown
    pub fn show_prefix(mut self, show_prefix: bool) -> Self {
        self.show_prefix = Some(show_prefix);
        self
    }

    /// Override the integer flag
    pub fn is_integer(mut self, is_integer: bool) -> Self {
        self.is_integer = Some(is_integer);
        self
    }

    /// Set the display symbol (`None` for no symbol)
    pub fn unit(mut self, unit: Option<String>) -> Self {
        self.unit = Some(unit);
        self
    }

    /// Set the lower limit (`None` for unbounded, default 0)
    pub fn min(mut self, min: Option<f64>) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the upper limit (`None` for unbounded, the default)
    pub fn max(mut self, max: Option<f64>) -> Self {
        self.max = Some(max);
        self
    }

    /// Override the step derived from the integer flag
    pub fn step(mut self, step: Step) -> Self {
        self.step = Some(step);
        self
    }

    /// Toggle HTML5 number input rendering (default on)
    pub fn html5(mut self, html5: bool) -> Self {
        self.html5 = Some(html5);
        self
    }

    /// Set the prefix selection policy
    pub fn prefix_policy(mut self, policy: PrefixPolicy) -> Self {
        self.prefix_policy = Some(policy);
        self
    }

    /// Resolve derived options and check their consistency
    pub fn resolve(self) -> Result<SiUnitOptions, FormError> {
        let unit_ref = self.measurement_unit.as_ref();

        let show_prefix = self
            .show_prefix
            .unwrap_or_else(|| unit_ref.map(|u| u.is_use_si_prefix()).unwrap_or(false));
        let is_integer = self
            .is_integer
            .unwrap_or_else(|| unit_ref.map(|u| u.is_integer()).unwrap_or(false));

        let unit = match (self.unit, unit_ref) {
            (Some(explicit), _) => explicit,
            (None, Some(measurement_unit)) => measurement_unit.unit.clone(),
            (None, None) => return Err(FormError::MissingOption("unit".to_string())),
        };

        let min = self.min.unwrap_or(Some(0.0));
        let max = self.max.flatten();
        for (name, bound) in [("min", min), ("max", max)] {
            if let Some(bound) = bound {
                if !bound.is_finite() {
                    return Err(FormError::InvalidOption(format!(
                        "{} must be finite, got {}",
                        name, bound
                    )));
                }
            }
        }
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(FormError::InvalidOption(format!(
                    "min {} is greater than max {}",
                    min, max
                )));
            }
        }

        let step = self
            .step
            .unwrap_or(if is_integer { Step::INTEGER } else { Step::Any });
        if let Step::Value(value) = step {
            if !value.is_finite() || value <= 0.0 {
                return Err(FormError::InvalidOption(format!(
                    "step must be a positive number, got {}",
                    value
                )));
            }
        }

        let options = SiUnitOptions {
            measurement_unit: self.measurement_unit,
            show_prefix,
            is_integer,
            unit,
            min,
            max,
            step,
            html5: self.html5.unwrap_or(true),
            prefix_policy: self.prefix_policy.unwrap_or_default(),
        };

        debug!(
            show_prefix = options.show_prefix,
            is_integer = options.is_integer,
            unit = options.unit.as_deref().unwrap_or(""),
            "Resolved SI unit field options"
        );

        Ok(options)
    }
}
