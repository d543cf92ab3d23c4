//! PartDB Domain Layer
//!
//! This crate contains the domain model for the PartDB parts inventory.
//! It has no external dependencies beyond `uuid` and defines the records and
//! value objects that the validation, form and CLI layers build upon.
//!
//! ## Key Concepts
//!
//! - **Part**: An inventory entry, carrying a group of advanced properties
//! - **Advanced properties**: Review flag, comma-separated tags and unit mass
//! - **Measurement unit**: Describes how amounts of a part are measured
//! - **SI prefix**: Power-of-ten multipliers used to display scaled values
//!
//! ## Architecture
//!
//! - Pure data and accessors only
//! - Persistence, validation and presentation live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod advanced;
pub mod measurement_unit;
pub mod part;
pub mod si_prefix;

// Re-exports for convenience
pub use advanced::AdvancedProperties;
pub use measurement_unit::MeasurementUnit;
pub use part::{Part, PartId};
pub use si_prefix::SiPrefix;
