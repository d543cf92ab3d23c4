//! Unit preset command implementation.

use crate::cli::{UnitAction, UnitArgs};
use crate::config::{Config, UnitPreset};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::collections::BTreeMap;
use std::path::Path;

/// Execute the unit command.
///
/// Changes are written back to `config_path`.
pub fn execute_unit(
    args: UnitArgs,
    config: &mut Config,
    config_path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        UnitAction::List => {
            println!("{}", formatter.format_units(&config.units)?);
        }
        UnitAction::Show { name } => {
            let preset = config
                .units
                .get(&name)
                .cloned()
                .ok_or_else(|| CliError::Config(format!("Unit '{}' not found", name)))?;
            let single = BTreeMap::from([(name, preset)]);
            println!("{}", formatter.format_units(&single)?);
        }
        UnitAction::Set {
            name,
            symbol,
            si_prefix,
            integer,
        } => {
            let existed = config.units.contains_key(&name);
            config.set_unit(
                name.clone(),
                UnitPreset {
                    symbol,
                    use_si_prefix: si_prefix,
                    is_integer: integer,
                },
            );
            config.save_to(config_path)?;

            let verb = if existed { "Updated" } else { "Created" };
            println!("{}", formatter.success(&format!("{} unit '{}'", verb, name)));
        }
        UnitAction::Delete { name } => {
            config.delete_unit(&name)?;
            config.save_to(config_path)?;
            println!("{}", formatter.success(&format!("Deleted unit '{}'", name)));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_set_and_delete_persist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let mut config = Config::default();

        execute_unit(
            UnitArgs {
                action: UnitAction::Set {
                    name: "volt".to_string(),
                    symbol: Some("V".to_string()),
                    si_prefix: true,
                    integer: false,
                },
            },
            &mut config,
            &path,
            &formatter,
        )
        .unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert!(loaded.get_unit("volt").unwrap().is_use_si_prefix());

        execute_unit(
            UnitArgs {
                action: UnitAction::Delete {
                    name: "volt".to_string(),
                },
            },
            &mut config,
            &path,
            &formatter,
        )
        .unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert!(loaded.get_unit("volt").is_err());
    }

    #[test]
    fn test_show_missing_unit() {
        let dir = tempfile::tempdir().unwrap();
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let mut config = Config::default();

        let result = execute_unit(
            UnitArgs {
                action: UnitAction::Show {
                    name: "tesla".to_string(),
                },
            },
            &mut config,
            &dir.path().join("config.toml"),
            &formatter,
        );
        assert!(result.is_err());
    }
}
