//! PartDB Gatekeeper
//!
//! Validates part records before they are persisted.
//!
//! The Gatekeeper provides:
//! - Mass checks (non-negative, finite, optional upper limit)
//! - Name presence checks
//! - Optional tag list format checks
//!
//! The domain setters accept any value; this crate is where the
//! invariants are enforced.
//!
//! # Examples
//!
//! ```
//! use partdb_domain::Part;
//! use partdb_gatekeeper::{Gatekeeper, ValidationStatus};
//!
//! let gatekeeper = Gatekeeper::default_config();
//!
//! let mut part = Part::new("BC547");
//! part.advanced_mut().set_mass(Some(-1.0));
//!
//! let result = gatekeeper.validate(&part);
//! assert_eq!(result.status, ValidationStatus::Rejected);
//! ```

#![warn(missing_docs)]

mod validator;
mod error;
mod config;

pub use validator::{Gatekeeper, ValidationResult, ValidationStatus, RejectionReason};
pub use error::GatekeeperError;
pub use config::ValidationConfig;
