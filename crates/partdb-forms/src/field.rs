//! Compound form field for SI-scaled values

use crate::{DataMapper, FieldError, SiFormatter, SiUnitOptions};
use partdb_domain::SiPrefix;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Name of the mantissa sub-field
pub const VALUE_FIELD: &str = "value";

/// Name of the prefix selector sub-field
pub const PREFIX_FIELD: &str = "prefix";

/// CSS class marking a compact input
const SMALL_CLASS: &str = "form-control-sm";

/// Data handed to the sub-fields for display
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewFields {
    /// Mantissa shown in the numeric input
    pub value: Option<f64>,

    /// Selected prefix exponent, `None` when there is no prefix selector
    pub prefix: Option<i32>,
}

/// Raw data submitted by the sub-fields
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SubmittedFields {
    /// Mantissa text as typed
    #[serde(default)]
    pub value: String,

    /// Selected prefix choice (exponent, symbol or name)
    #[serde(default)]
    pub prefix: Option<String>,
}

impl SubmittedFields {
    /// Build a submission from its raw parts
    pub fn new(value: impl Into<String>, prefix: Option<&str>) -> Self {
        Self {
            value: value.into(),
            prefix: prefix.map(str::to_string),
        }
    }
}

/// Variables exposed to the view template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewVars {
    /// Unit symbol shown next to the input
    pub unit: Option<String>,

    /// Render the compact variant
    pub sm: bool,
}

/// HTML attributes of the numeric input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberAttrs {
    /// Lower limit, empty when unbounded
    pub min: String,
    /// Upper limit, empty when unbounded
    pub max: String,
    /// Step, `any` when unconstrained
    pub step: String,
}

/// One choice of the prefix selector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrefixChoice {
    /// Displayed symbol
    pub label: String,
    /// Submitted exponent
    pub value: i32,
}

/// Kind of a sub-field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChildKind {
    /// Numeric input
    Number {
        /// Render as an HTML5 number input
        html5: bool,
        /// Input attributes
        attr: NumberAttrs,
    },

    /// Enumerated selector
    Choice {
        /// Available choices in display order
        choices: Vec<PrefixChoice>,
    },
}

/// Description of one sub-field of the compound field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildField {
    /// Sub-field name
    pub name: String,
    /// Whether input is mandatory
    pub required: bool,
    /// Sub-field kind
    #[serde(flatten)]
    pub kind: ChildKind,
}

/// Compound field editing one value as mantissa plus optional SI prefix
///
/// Constructed per rendering or submission from resolved options. It holds
/// no state besides them.
#[derive(Debug, Clone)]
pub struct SiUnitField {
    options: SiUnitOptions,
    formatter: SiFormatter,
}

impl SiUnitField {
    /// Create a field from resolved options
    pub fn new(options: SiUnitOptions) -> Self {
        let formatter = SiFormatter::new(options.prefix_policy);
        Self { options, formatter }
    }

    /// Resolved options
    pub fn options(&self) -> &SiUnitOptions {
        &self.options
    }

    /// Whether the prefix selector sub-field exists
    pub fn has_prefix(&self) -> bool {
        self.options.show_prefix
    }

    /// Sub-field tree: the mantissa input and, if enabled, the prefix selector
    pub fn children(&self) -> Vec<ChildField> {
        let mut children = vec![ChildField {
            name: VALUE_FIELD.to_string(),
            required: true,
            kind: ChildKind::Number {
                html5: self.options.html5,
                attr: NumberAttrs {
                    min: bound_attr(self.options.min),
                    max: bound_attr(self.options.max),
                    step: self.options.step.to_string(),
                },
            },
        }];

        if self.has_prefix() {
            children.push(ChildField {
                name: PREFIX_FIELD.to_string(),
                required: false,
                kind: ChildKind::Choice {
                    choices: SiPrefix::ALL
                        .iter()
                        .map(|prefix| PrefixChoice {
                            label: prefix.symbol().to_string(),
                            value: prefix.exponent(),
                        })
                        .collect(),
                },
            });
        }

        children
    }

    /// View variables for the template
    ///
    /// `css_class` is the class list configured on the field. The compact
    /// variant is used when one of its whitespace-separated classes is
    /// exactly `form-control-sm`; longer class names that merely start with
    /// it, such as `form-control-sm-dense`, do not count.
    pub fn build_view(&self, css_class: Option<&str>) -> ViewVars {
        let sm = css_class
            .map(|classes| classes.split_whitespace().any(|class| class == SMALL_CLASS))
            .unwrap_or(false);

        ViewVars {
            unit: self.options.unit.clone(),
            sm,
        }
    }

    /// Resolve the submitted prefix choice, falling back to no prefix
    fn submitted_prefix(&self, submitted: &SubmittedFields) -> SiPrefix {
        let choice = match submitted.prefix.as_deref().map(str::trim) {
            Some(choice) if !choice.is_empty() => choice,
            _ => return SiPrefix::None,
        };

        SiPrefix::parse(choice).unwrap_or_else(|| {
            warn!(choice, "Unknown prefix choice submitted, using no prefix");
            SiPrefix::None
        })
    }
}

impl DataMapper for SiUnitField {
    type Model = f64;
    type View = ViewFields;
    type Submitted = SubmittedFields;
    type Error = FieldError;

    fn to_view(&self, model: Option<f64>) -> ViewFields {
        let model = match model {
            Some(model) => model,
            None => {
                return ViewFields {
                    value: None,
                    prefix: self.has_prefix().then_some(0),
                }
            }
        };

        if !self.has_prefix() {
            return ViewFields {
                value: Some(model),
                prefix: None,
            };
        }

        let split = self.formatter.convert_value(model);
        debug!(
            model,
            mantissa = split.value,
            prefix = split.prefix_magnitude(),
            "Split value for display"
        );

        ViewFields {
            value: Some(split.value),
            prefix: Some(split.prefix_magnitude()),
        }
    }

    fn from_view(&self, submitted: &SubmittedFields) -> Result<Option<f64>, FieldError> {
        let text = submitted.value.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let mantissa = text
            .parse::<f64>()
            .ok()
            .filter(|m| m.is_finite())
            .ok_or_else(|| FieldError::invalid_number(submitted.value.clone()))?;

        if !self.has_prefix() {
            return Ok(Some(mantissa));
        }

        let prefix = self.submitted_prefix(submitted);
        let model = self.formatter.combine(mantissa, prefix);
        debug!(mantissa, prefix = prefix.exponent(), model, "Recombined submitted value");

        Ok(Some(model))
    }
}

fn bound_attr(bound: Option<f64>) -> String {
    bound.map(|b| b.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use partdb_domain::MeasurementUnit;

    fn prefixed_field() -> SiUnitField {
        let ohm = MeasurementUnit::new("Ohm", Some("Ω".to_string())).si_prefix(true);
        SiUnitField::new(SiUnitOptions::from_unit(ohm).unwrap())
    }

    fn plain_field() -> SiUnitField {
        let pieces = MeasurementUnit::new("Pieces", None).integer(true);
        SiUnitField::new(SiUnitOptions::from_unit(pieces).unwrap())
    }

    #[test]
    fn test_children_with_prefix() {
        let children = prefixed_field().children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].name, VALUE_FIELD);
        assert!(children[0].required);
        assert_eq!(children[1].name, PREFIX_FIELD);

        match &children[1].kind {
            ChildKind::Choice { choices } => {
                let labels: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();
                let values: Vec<i32> = choices.iter().map(|c| c.value).collect();
                assert_eq!(labels, vec!["M", "k", "", "m", "µ"]);
                assert_eq!(values, vec![6, 3, 0, -3, -6]);
            }
            _ => panic!("Expected Choice"),
        }
    }

    #[test]
    fn test_children_without_prefix() {
        let children = plain_field().children();
        assert_eq!(children.len(), 1);
        match &children[0].kind {
            ChildKind::Number { html5, attr } => {
                assert!(*html5);
                assert_eq!(attr.min, "0");
                assert_eq!(attr.max, "");
                assert_eq!(attr.step, "1");
            }
            _ => panic!("Expected Number"),
        }
    }

    #[test]
    fn test_null_model() {
        assert_eq!(
            prefixed_field().to_view(None),
            ViewFields {
                value: None,
                prefix: Some(0),
            }
        );
        assert_eq!(
            plain_field().to_view(None),
            ViewFields {
                value: None,
                prefix: None,
            }
        );
    }

    #[test]
    fn test_plain_field_passthrough() {
        let field = plain_field();
        let view = field.to_view(Some(42.0));
        assert_eq!(
            view,
            ViewFields {
                value: Some(42.0),
                prefix: None,
            }
        );

        // A submitted prefix is ignored when there is no selector
        let submitted = SubmittedFields::new("42", Some("3"));
        assert_eq!(field.from_view(&submitted).unwrap(), Some(42.0));
    }

    #[test]
    fn test_plain_field_does_not_scale_large_values() {
        let view = plain_field().to_view(Some(3300.0));
        assert_eq!(view.value, Some(3300.0));
    }

    #[test]
    fn test_missing_prefix_defaults_to_zero() {
        let field = prefixed_field();
        assert_eq!(field.from_view(&SubmittedFields::new("12", None)).unwrap(), Some(12.0));
        assert_eq!(field.from_view(&SubmittedFields::new("12", Some(""))).unwrap(), Some(12.0));
    }

    #[test]
    fn test_unknown_prefix_falls_back() {
        let field = prefixed_field();
        let submitted = SubmittedFields::new("12", Some("9"));
        assert_eq!(field.from_view(&submitted).unwrap(), Some(12.0));
    }

    #[test]
    fn test_prefix_symbol_accepted() {
        let field = prefixed_field();
        let submitted = SubmittedFields::new("2", Some("M"));
        assert_eq!(field.from_view(&submitted).unwrap(), Some(2_000_000.0));
    }

    #[test]
    fn test_empty_mantissa_is_no_value() {
        let field = prefixed_field();
        assert_eq!(field.from_view(&SubmittedFields::new("  ", Some("3"))).unwrap(), None);
    }

    #[test]
    fn test_invalid_mantissa() {
        let field = prefixed_field();
        let err = field
            .from_view(&SubmittedFields::new("3.3x", Some("3")))
            .unwrap_err();
        assert_eq!(err.path, VALUE_FIELD);
        assert_eq!(err.input, "3.3x");

        let err = field.from_view(&SubmittedFields::new("NaN", None)).unwrap_err();
        assert_eq!(err.path, "value");
    }

    #[test]
    fn test_build_view() {
        let field = prefixed_field();
        let vars = field.build_view(Some("form-control form-control-sm"));
        assert!(vars.sm);
        assert_eq!(vars.unit.as_deref(), Some("Ω"));

        assert!(!field.build_view(Some("form-control")).sm);
        assert!(!field.build_view(None).sm);
    }

    #[test]
    fn test_compact_class_must_match_whole_token() {
        let field = prefixed_field();
        assert!(!field.build_view(Some("form-control-sm-dense")).sm);
        assert!(!field.build_view(Some("my-form-control-sm")).sm);
        assert!(field.build_view(Some("  form-control-sm\tcard ")).sm);
    }
}
