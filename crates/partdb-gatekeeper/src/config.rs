//! Gatekeeper configuration

use crate::GatekeeperError;
use serde::{Deserialize, Serialize};

/// Configuration for validation rules
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Reject negative masses
    pub validate_mass_sign: bool,

    /// Reject NaN and infinite masses
    pub validate_mass_finite: bool,

    /// Upper limit for the mass of a single part unit in grams
    pub max_mass_grams: Option<f64>,

    /// Reject parts with an empty (or whitespace-only) name
    pub validate_name: bool,

    /// Reject tag lists with empty entries (e.g. "a,,b")
    pub validate_tag_format: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            validate_mass_sign: true,
            validate_mass_finite: true,
            max_mass_grams: None,
            validate_name: true,
            validate_tag_format: false,
        }
    }
}

impl ValidationConfig {
    /// Create a permissive configuration (only the mass invariant)
    pub fn permissive() -> Self {
        Self {
            validate_mass_sign: true,
            validate_mass_finite: false,
            max_mass_grams: None,
            validate_name: false,
            validate_tag_format: false,
        }
    }

    /// Create a strict configuration (all validations enabled)
    pub fn strict() -> Self {
        Self {
            validate_mass_sign: true,
            validate_mass_finite: true,
            max_mass_grams: Some(1_000_000.0),
            validate_name: true,
            validate_tag_format: true,
        }
    }

    /// Check that the configuration itself is usable
    pub fn check(&self) -> Result<(), GatekeeperError> {
        if let Some(limit) = self.max_mass_grams {
            if !limit.is_finite() || limit < 0.0 {
                return Err(GatekeeperError::Config(format!(
                    "max_mass_grams must be a non-negative finite number, got {}",
                    limit
                )));
            }
        }
        Ok(())
    }
}
