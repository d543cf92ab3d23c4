//! Check-part command implementation.

use crate::cli::CheckPartArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use partdb_domain::Part;
use partdb_gatekeeper::{Gatekeeper, ValidationConfig};
use tracing::info;

/// Build the part described by the arguments.
pub fn part_from_args(args: &CheckPartArgs) -> Part {
    let mut part = Part::new(args.name.clone());
    part.advanced_mut()
        .set_needs_review(args.needs_review)
        .set_tags(args.tags.clone())
        .set_mass(args.mass);
    part
}

/// Execute the check-part command.
///
/// Returns [`CliError::Rejected`] after printing the reasons when the part
/// fails validation.
pub fn execute_check_part(
    args: CheckPartArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let rules: ValidationConfig = args
        .rules
        .map(Into::into)
        .unwrap_or_else(|| config.validation.clone());
    let gatekeeper = Gatekeeper::new(rules)?;

    let part = part_from_args(&args);
    let result = gatekeeper.validate(&part);
    info!(part = %part.id, accepted = result.is_accepted(), "Checked part");

    println!("{}", formatter.format_validation(&part, &result)?);

    if result.is_accepted() {
        Ok(())
    } else {
        Err(CliError::Rejected(result.reasons.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::RulesArg;
    use crate::config::OutputFormat;

    fn args(mass: Option<f64>, tags: &str, rules: Option<RulesArg>) -> CheckPartArgs {
        CheckPartArgs {
            name: "Resistor 10k".to_string(),
            mass,
            tags: tags.to_string(),
            needs_review: true,
            rules,
        }
    }

    #[test]
    fn test_part_from_args() {
        let part = part_from_args(&args(Some(0.25), "smd,0805", None));
        assert_eq!(part.name, "Resistor 10k");
        assert!(part.needs_review());
        assert_eq!(part.tags(), "smd,0805");
        assert_eq!(part.mass(), Some(0.25));
    }

    #[test]
    fn test_accepted_part() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let result = execute_check_part(
            args(Some(0.25), "smd", None),
            &Config::default(),
            &formatter,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_negative_mass_rejected() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let result = execute_check_part(args(Some(-1.0), "", None), &Config::default(), &formatter);
        assert!(matches!(result, Err(CliError::Rejected(1))));
    }

    #[test]
    fn test_rules_override_config() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let result = execute_check_part(
            args(Some(1.0), "smd,,0805", Some(RulesArg::Strict)),
            &Config::default(),
            &formatter,
        );
        assert!(matches!(result, Err(CliError::Rejected(1))));

        let result = execute_check_part(
            args(Some(-1.0), "", Some(RulesArg::Permissive)),
            &Config::default(),
            &formatter,
        );
        assert!(result.is_err());
    }
}
