//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use partdb_domain::MeasurementUnit;
use partdb_forms::PrefixPolicy;
use partdb_gatekeeper::ValidationConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Prefix selection range
    #[serde(default)]
    pub prefix_policy: PolicySettings,

    /// Part validation rules
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Measurement unit presets by name
    #[serde(default = "default_units")]
    pub units: BTreeMap<String, UnitPreset>,
}

/// Measurement unit preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitPreset {
    /// Display symbol
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,

    /// Show values with an SI prefix
    #[serde(default)]
    pub use_si_prefix: bool,

    /// Only whole numbers
    #[serde(default)]
    pub is_integer: bool,
}

/// Prefix selection range as stored in the config file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PolicySettings {
    /// Inclusive lower bound of a displayed mantissa
    #[serde(default = "default_min_mantissa")]
    pub min_mantissa: f64,

    /// Exclusive upper bound of a displayed mantissa
    #[serde(default = "default_max_mantissa")]
    pub max_mantissa: f64,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Decimals used when formatting values
    #[serde(default = "default_decimals")]
    pub decimals: usize,

    /// Command history size
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".partdb").join("config.toml"))
    }

    /// Load configuration from a file, defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Get a unit preset as a measurement unit.
    pub fn get_unit(&self, name: &str) -> Result<MeasurementUnit> {
        self.units
            .get(name)
            .map(|preset| preset.to_measurement_unit(name))
            .ok_or_else(|| CliError::Config(format!("Unit '{}' not found", name)))
    }

    /// Add or update a unit preset.
    pub fn set_unit(&mut self, name: String, preset: UnitPreset) {
        self.units.insert(name, preset);
    }

    /// Delete a unit preset.
    pub fn delete_unit(&mut self, name: &str) -> Result<UnitPreset> {
        self.units
            .remove(name)
            .ok_or_else(|| CliError::Config(format!("Unit '{}' does not exist", name)))
    }

    /// Prefix policy checked for consistency.
    pub fn prefix_policy(&self) -> Result<PrefixPolicy> {
        Ok(PrefixPolicy::new(
            self.prefix_policy.min_mantissa,
            self.prefix_policy.max_mantissa,
        )?)
    }
}

impl UnitPreset {
    /// Convert to the domain descriptor.
    pub fn to_measurement_unit(&self, name: &str) -> MeasurementUnit {
        MeasurementUnit::new(name, self.symbol.clone())
            .si_prefix(self.use_si_prefix)
            .integer(self.is_integer)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            prefix_policy: PolicySettings::default(),
            validation: ValidationConfig::default(),
            units: default_units(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            decimals: 2,
            history_size: 1000,
        }
    }
}

impl Default for PolicySettings {
    fn default() -> Self {
        Self {
            min_mantissa: PrefixPolicy::DEFAULT_MIN,
            max_mantissa: PrefixPolicy::DEFAULT_MAX,
        }
    }
}

fn default_units() -> BTreeMap<String, UnitPreset> {
    let preset = |symbol: Option<&str>, use_si_prefix: bool, is_integer: bool| UnitPreset {
        symbol: symbol.map(str::to_string),
        use_si_prefix,
        is_integer,
    };

    let mut units = BTreeMap::new();
    units.insert("ohm".to_string(), preset(Some("Ω"), true, false));
    units.insert("farad".to_string(), preset(Some("F"), true, false));
    units.insert("gram".to_string(), preset(Some("g"), true, false));
    units.insert("pieces".to_string(), preset(None, false, true));
    units
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_decimals() -> usize {
    2
}

fn default_history_size() -> usize {
    1000
}

fn default_min_mantissa() -> f64 {
    PrefixPolicy::DEFAULT_MIN
}

fn default_max_mantissa() -> f64 {
    PrefixPolicy::DEFAULT_MAX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert!(config.units.contains_key("ohm"));
        assert!(config.prefix_policy().is_ok());
    }

    #[test]
    fn test_unit_presets() {
        let config = Config::default();
        let ohm = config.get_unit("ohm").unwrap();
        assert_eq!(ohm.name, "ohm");
        assert_eq!(ohm.unit(), Some("Ω"));
        assert!(ohm.is_use_si_prefix());

        let pieces = config.get_unit("pieces").unwrap();
        assert!(pieces.is_integer());
        assert_eq!(pieces.unit(), None);

        assert!(config.get_unit("volt").is_err());
    }

    #[test]
    fn test_unit_management() {
        let mut config = Config::default();
        config.set_unit(
            "volt".to_string(),
            UnitPreset {
                symbol: Some("V".to_string()),
                use_si_prefix: true,
                is_integer: false,
            },
        );
        assert!(config.get_unit("volt").is_ok());

        config.delete_unit("volt").unwrap();
        assert!(config.delete_unit("volt").is_err());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [settings]
            format = "json"

            [prefix_policy]
            max_mantissa = 100.0
            "#,
        )
        .unwrap();

        assert_eq!(config.settings.format, OutputFormat::Json);
        assert!(config.settings.color);
        assert_eq!(config.prefix_policy.min_mantissa, 1.0);
        assert_eq!(config.prefix_policy.max_mantissa, 100.0);
        assert!(config.units.contains_key("farad"));
        assert!(config.validation.validate_mass_sign);
    }

    #[test]
    fn test_invalid_policy_rejected() {
        let mut config = Config::default();
        config.prefix_policy.max_mantissa = 0.5;
        assert!(config.prefix_policy().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.settings.decimals = 4;
        config.set_unit(
            "henry".to_string(),
            UnitPreset {
                symbol: Some("H".to_string()),
                use_si_prefix: true,
                is_integer: false,
            },
        );
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.settings.decimals, 4);
        assert_eq!(loaded.units.get("henry"), config.units.get("henry"));
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.settings.decimals, 2);
    }
}
