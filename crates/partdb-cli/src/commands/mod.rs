//! Command implementations.

pub mod check_part;
pub mod combine;
pub mod convert;
pub mod prefixes;
pub mod split;
pub mod unit;

pub use self::check_part::execute_check_part;
pub use self::combine::execute_combine;
pub use self::convert::{execute_format, execute_parse};
pub use self::prefixes::execute_prefixes;
pub use self::split::execute_split;
pub use self::unit::execute_unit;

use crate::cli::FieldArgs;
use crate::config::Config;
use crate::error::Result;
use partdb_forms::{SiUnitField, SiUnitOptions};

/// Build the compound field described by the command line.
///
/// Flags override what the unit preset provides. Without a preset or a
/// symbol the field has no unit symbol.
pub fn build_field(args: &FieldArgs, config: &Config) -> Result<SiUnitField> {
    let mut builder = SiUnitOptions::builder().prefix_policy(config.prefix_policy()?);

    match &args.unit {
        Some(name) => builder = builder.measurement_unit(config.get_unit(name)?),
        None if args.symbol.is_none() => builder = builder.unit(None),
        None => {}
    }

    if let Some(symbol) = &args.symbol {
        builder = builder.unit(Some(symbol.clone()));
    }
    if args.si_prefix {
        builder = builder.show_prefix(true);
    }
    if args.no_si_prefix {
        builder = builder.show_prefix(false);
    }
    if args.integer {
        builder = builder.is_integer(true);
    }

    Ok(SiUnitField::new(builder.resolve()?))
}

/// Symbol of a unit preset, if a preset was named.
pub(crate) fn preset_symbol(config: &Config, unit: Option<&str>) -> Result<Option<String>> {
    match unit {
        Some(name) => Ok(config.get_unit(name)?.unit().map(str::to_string)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(unit: Option<&str>) -> FieldArgs {
        FieldArgs {
            unit: unit.map(str::to_string),
            ..FieldArgs::default()
        }
    }

    #[test]
    fn test_preset_drives_field() {
        let config = Config::default();
        let field = build_field(&args(Some("ohm")), &config).unwrap();
        assert!(field.has_prefix());
        assert_eq!(field.options().unit.as_deref(), Some("Ω"));
    }

    #[test]
    fn test_flags_override_preset() {
        let config = Config::default();
        let mut field_args = args(Some("ohm"));
        field_args.no_si_prefix = true;
        field_args.symbol = Some("kΩ".to_string());

        let field = build_field(&field_args, &config).unwrap();
        assert!(!field.has_prefix());
        assert_eq!(field.options().unit.as_deref(), Some("kΩ"));
    }

    #[test]
    fn test_bare_field_has_no_symbol() {
        let config = Config::default();
        let field = build_field(&args(None), &config).unwrap();
        assert!(!field.has_prefix());
        assert_eq!(field.options().unit, None);
    }

    #[test]
    fn test_unknown_preset() {
        let config = Config::default();
        assert!(build_field(&args(Some("volt")), &config).is_err());
    }

    #[test]
    fn test_configured_policy_is_used() {
        let mut config = Config::default();
        config.prefix_policy.min_mantissa = 0.1;
        config.prefix_policy.max_mantissa = 100.0;

        let field = build_field(&args(Some("ohm")), &config).unwrap();
        assert_eq!(field.options().prefix_policy.max_mantissa(), 100.0);
    }

    #[test]
    fn test_preset_symbol() {
        let config = Config::default();
        assert_eq!(preset_symbol(&config, Some("farad")).unwrap().as_deref(), Some("F"));
        assert_eq!(preset_symbol(&config, Some("pieces")).unwrap(), None);
        assert_eq!(preset_symbol(&config, None).unwrap(), None);
    }
}
