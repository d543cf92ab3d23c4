//! Output formatting for the CLI.

use crate::config::{OutputFormat, UnitPreset};
use crate::error::Result;
use colored::*;
use partdb_domain::{Part, SiPrefix};
use partdb_forms::{FieldError, ViewFields, ViewVars};
use partdb_gatekeeper::ValidationResult;
use std::collections::BTreeMap;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the display split of a value.
    pub fn format_split(
        &self,
        model: Option<f64>,
        view: &ViewFields,
        vars: &ViewVars,
    ) -> Result<String> {
        let prefix = view.prefix.and_then(SiPrefix::from_exponent);

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "model": model,
                "view": view,
                "vars": vars,
            }))?),
            OutputFormat::Quiet => Ok(match (view.value, prefix) {
                (Some(value), Some(prefix)) => format!("{} {}", value, prefix.exponent()),
                (Some(value), None) => value.to_string(),
                (None, _) => String::new(),
            }),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Model", "Mantissa", "Prefix", "Exponent", "Unit", "Small"]);
                builder.push_record([
                    optional(model),
                    optional(view.value),
                    prefix.map(|p| p.symbol().to_string()).unwrap_or_else(|| "-".to_string()),
                    view.prefix.map(|e| e.to_string()).unwrap_or_else(|| "-".to_string()),
                    vars.unit.clone().unwrap_or_else(|| "-".to_string()),
                    vars.sm.to_string(),
                ]);
                Ok(self.render(builder))
            }
        }
    }

    /// Format a recombined model value.
    pub fn format_model(&self, model: Option<f64>, unit: Option<&str>) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "model": model,
                "unit": unit,
            }))?),
            OutputFormat::Quiet => Ok(model.map(|m| m.to_string()).unwrap_or_default()),
            OutputFormat::Table => Ok(match model {
                Some(model) => {
                    self.success(format!("{} {}", model, unit.unwrap_or("")).trim_end())
                }
                None => self.warning("No value submitted"),
            }),
        }
    }

    /// Format a rejected field submission.
    pub fn format_field_error(&self, error: &FieldError) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(error)?),
            OutputFormat::Quiet => Ok(error.path.clone()),
            OutputFormat::Table => Ok(self.error(&format!(
                "[{}] {} (got '{}')",
                error.path, error.message, error.input
            ))),
        }
    }

    /// Format a plain text value, e.g. a formatted or parsed number.
    pub fn format_text(&self, key: &str, text: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                Ok(serde_json::to_string_pretty(&serde_json::json!({ key: text }))?)
            }
            OutputFormat::Quiet | OutputFormat::Table => Ok(text.to_string()),
        }
    }

    /// Format the prefix table.
    pub fn format_prefixes(&self) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let prefixes: Vec<serde_json::Value> = SiPrefix::ALL
                    .iter()
                    .map(|p| {
                        serde_json::json!({
                            "name": p.as_str(),
                            "symbol": p.symbol(),
                            "exponent": p.exponent(),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&prefixes)?)
            }
            OutputFormat::Quiet => Ok(SiPrefix::ALL
                .iter()
                .map(|p| p.exponent().to_string())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Name", "Symbol", "Exponent", "Multiplier"]);
                for prefix in SiPrefix::ALL {
                    builder.push_record([
                        prefix.as_str().to_string(),
                        prefix.symbol().to_string(),
                        prefix.exponent().to_string(),
                        format!("1e{}", prefix.exponent()),
                    ]);
                }
                Ok(self.render(builder))
            }
        }
    }

    /// Format unit presets.
    pub fn format_units(&self, units: &BTreeMap<String, UnitPreset>) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json: BTreeMap<&String, serde_json::Value> = units
                    .iter()
                    .map(|(name, preset)| {
                        (
                            name,
                            serde_json::json!({
                                "symbol": preset.symbol,
                                "use_si_prefix": preset.use_si_prefix,
                                "is_integer": preset.is_integer,
                            }),
                        )
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Quiet => Ok(units.keys().cloned().collect::<Vec<_>>().join("\n")),
            OutputFormat::Table => {
                if units.is_empty() {
                    return Ok(self.colorize("No units configured.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Name", "Symbol", "SI prefix", "Integer"]);
                for (name, preset) in units {
                    builder.push_record([
                        name.clone(),
                        preset.symbol.clone().unwrap_or_else(|| "-".to_string()),
                        preset.use_si_prefix.to_string(),
                        preset.is_integer.to_string(),
                    ]);
                }
                Ok(self.render(builder))
            }
        }
    }

    /// Format a part validation result.
    pub fn format_validation(&self, part: &Part, result: &ValidationResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "id": part.id.to_string(),
                "name": part.name,
                "needs_review": part.needs_review(),
                "tags": part.tags(),
                "mass": part.mass(),
                "result": result,
            }))?),
            OutputFormat::Quiet => Ok(if result.is_accepted() {
                "accepted".to_string()
            } else {
                "rejected".to_string()
            }),
            OutputFormat::Table => {
                if result.is_accepted() {
                    return Ok(self.success(&format!("Part '{}' accepted", part.name)));
                }

                let mut builder = Builder::default();
                builder.push_record(["Field", "Reason"]);
                for reason in &result.reasons {
                    builder.push_record([reason.field().to_string(), reason.to_string()]);
                }
                Ok(format!(
                    "{}\n{}",
                    self.error(&format!("Part '{}' rejected", part.name)),
                    self.render(builder)
                ))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn optional(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}
