//! Part validation logic

use crate::{GatekeeperError, ValidationConfig};
use partdb_domain::Part;
use serde::Serialize;
use tracing::debug;

/// Result of part validation
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    /// Whether the part passed validation
    pub status: ValidationStatus,

    /// Rejection reasons (if any)
    pub reasons: Vec<RejectionReason>,
}

impl ValidationResult {
    /// Whether the part was accepted
    pub fn is_accepted(&self) -> bool {
        self.status == ValidationStatus::Accepted
    }
}

/// Validation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    /// Part accepted
    Accepted,

    /// Part rejected
    Rejected,
}

/// Reasons for rejection
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectionReason {
    /// Mass is below zero
    NegativeMass {
        /// Offending mass
        mass: f64,
    },

    /// Mass is NaN or infinite
    NonFiniteMass {
        /// Offending mass, rendered as text since JSON has no NaN
        mass: String,
    },

    /// Mass exceeds the configured limit
    MassAboveLimit {
        /// Offending mass
        mass: f64,
        /// Configured limit
        limit: f64,
    },

    /// Name is empty or whitespace only
    EmptyName,

    /// Tag list contains an empty entry
    EmptyTag {
        /// Zero-based position of the empty entry
        position: usize,
    },
}

impl RejectionReason {
    /// Form field path this reason belongs to
    pub fn field(&self) -> &'static str {
        match self {
            RejectionReason::NegativeMass { .. }
            | RejectionReason::NonFiniteMass { .. }
            | RejectionReason::MassAboveLimit { .. } => "mass",
            RejectionReason::EmptyName => "name",
            RejectionReason::EmptyTag { .. } => "tags",
        }
    }
}

impl std::fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectionReason::NegativeMass { mass } => {
                write!(f, "Mass {} must be positive or zero", mass)
            }
            RejectionReason::NonFiniteMass { mass } => {
                write!(f, "Mass {} is not a finite number", mass)
            }
            RejectionReason::MassAboveLimit { mass, limit } => {
                write!(f, "Mass {} exceeds the limit of {} g", mass, limit)
            }
            RejectionReason::EmptyName => write!(f, "Name must not be empty"),
            RejectionReason::EmptyTag { position } => {
                write!(f, "Tag at position {} is empty", position)
            }
        }
    }
}

/// The Gatekeeper validates parts before storage
pub struct Gatekeeper {
    config: ValidationConfig,
}

impl Gatekeeper {
    /// Create a new Gatekeeper with the given configuration
    pub fn new(config: ValidationConfig) -> Result<Self, GatekeeperError> {
        config.check()?;
        Ok(Self { config })
    }

    /// Create a Gatekeeper with default configuration
    pub fn default_config() -> Self {
        Self {
            config: ValidationConfig::default(),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate a part against the configured rules
    pub fn validate(&self, part: &Part) -> ValidationResult {
        let mut reasons = Vec::new();

        // 1. Name
        if self.config.validate_name && part.name.trim().is_empty() {
            reasons.push(RejectionReason::EmptyName);
        }

        // 2. Mass
        if let Some(reason) = self.validate_mass(part.mass()) {
            reasons.push(reason);
        }

        // 3. Tag format
        if self.config.validate_tag_format {
            if let Some(reason) = self.validate_tags(part.tags()) {
                reasons.push(reason);
            }
        }

        let status = if reasons.is_empty() {
            ValidationStatus::Accepted
        } else {
            ValidationStatus::Rejected
        };

        debug!(part = %part.id, ?status, reasons = reasons.len(), "Validated part");

        ValidationResult { status, reasons }
    }

    /// Validate the mass (PositiveOrZero, finite, optional limit)
    fn validate_mass(&self, mass: Option<f64>) -> Option<RejectionReason> {
        let mass = mass?;

        if !mass.is_finite() {
            if self.config.validate_mass_finite {
                return Some(RejectionReason::NonFiniteMass {
                    mass: mass.to_string(),
                });
            }
            return None;
        }

        if self.config.validate_mass_sign && mass < 0.0 {
            return Some(RejectionReason::NegativeMass { mass });
        }

        if let Some(limit) = self.config.max_mass_grams {
            if mass > limit {
                return Some(RejectionReason::MassAboveLimit { mass, limit });
            }
        }

        None
    }

    /// Validate the tag list format
    ///
    /// An empty tag string is valid (no tags). A single trailing comma is
    /// tolerated.
    fn validate_tags(&self, tags: &str) -> Option<RejectionReason> {
        if tags.trim().is_empty() {
            return None;
        }

        let trimmed = tags.trim_end();
        let trimmed = trimmed.strip_suffix(',').unwrap_or(trimmed);
        trimmed
            .split(',')
            .position(|entry| entry.trim().is_empty())
            .map(|position| RejectionReason::EmptyTag { position })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: any finite non-negative mass passes the default rules
        #[test]
        fn test_non_negative_mass_accepted(mass in 0.0f64..1.0e9) {
            let gatekeeper = Gatekeeper::default_config();
            let mut part = Part::new("p");
            part.advanced_mut().set_mass(Some(mass));
            prop_assert!(gatekeeper.validate(&part).is_accepted());
        }

        /// Property: any negative mass is rejected
        #[test]
        fn test_negative_mass_rejected(mass in -1.0e9f64..-1.0e-12) {
            let gatekeeper = Gatekeeper::default_config();
            let mut part = Part::new("p");
            part.advanced_mut().set_mass(Some(mass));
            prop_assert!(!gatekeeper.validate(&part).is_accepted());
        }
    }
}
