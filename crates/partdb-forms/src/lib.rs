//! PartDB Forms
//!
//! Presentation-layer mapping for values expressed in SI units.
//!
//! # Overview
//!
//! A scaled value such as a resistance of 3300 Ω is stored as one number but
//! edited as a mantissa plus an SI prefix (`3.3` and `k`). This crate provides
//! the pieces a form adapter needs to do that:
//!
//! - **SiFormatter**: split a value into mantissa and prefix, format and parse
//!   prefixed strings
//! - **SiUnitOptions**: field configuration resolved from a measurement unit
//! - **SiUnitField**: the compound field with its sub-field tree, view
//!   variables and the model/view mapping
//!
//! # Architecture
//!
//! ```text
//! MeasurementUnit → SiUnitOptionsBuilder::resolve → SiUnitField
//!                                                    ├─ to_view   (model → ViewFields)
//!                                                    └─ from_view (SubmittedFields → model)
//! ```
//!
//! # Example Usage
//!
//! ```
//! use partdb_domain::MeasurementUnit;
//! use partdb_forms::{DataMapper, SiUnitField, SiUnitOptions, SubmittedFields};
//!
//! let ohm = MeasurementUnit::new("Ohm", Some("Ω".to_string())).si_prefix(true);
//! let options = SiUnitOptions::builder().measurement_unit(ohm).resolve()?;
//! let field = SiUnitField::new(options);
//!
//! let view = field.to_view(Some(3300.0));
//! assert_eq!(view.prefix, Some(3));
//!
//! let submitted = SubmittedFields::new("3.3", Some("3"));
//! let model = field.from_view(&submitted).unwrap();
//! assert!((model.unwrap() - 3300.0).abs() < 1e-9);
//! # Ok::<(), partdb_forms::FormError>(())
//! ```

#![warn(missing_docs)]

mod error;
mod field;
mod formatter;
mod mapper;
mod options;
mod policy;

pub use error::{FieldError, FormError};
pub use field::{
    ChildField, ChildKind, NumberAttrs, PrefixChoice, SiUnitField, SubmittedFields, ViewFields,
    ViewVars, PREFIX_FIELD, VALUE_FIELD,
};
pub use formatter::{SiFormatter, SiValue};
pub use mapper::DataMapper;
pub use options::{SiUnitOptions, SiUnitOptionsBuilder, Step};
pub use policy::PrefixPolicy;
