//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};

/// PartDB CLI - Convert SI-prefixed part values and validate part records.
#[derive(Debug, Parser)]
#[command(name = "partdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "PARTDB_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (values only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Split a stored value into mantissa and SI prefix
    Split(SplitArgs),

    /// Recombine a mantissa and SI prefix into a stored value
    Combine(CombineArgs),

    /// Format a value with the best fitting SI prefix
    Format(FormatArgs),

    /// Parse a prefixed string such as "3.3 k"
    Parse(ParseArgs),

    /// List the supported SI prefixes
    Prefixes,

    /// Manage measurement unit presets
    Unit(UnitArgs),

    /// Validate part properties
    CheckPart(CheckPartArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Field configuration shared by split and combine.
#[derive(Debug, Clone, Default, Args)]
pub struct FieldArgs {
    /// Measurement unit preset (see `partdb unit list`)
    #[arg(short, long)]
    pub unit: Option<String>,

    /// Display symbol, overrides the preset's symbol
    #[arg(long)]
    pub symbol: Option<String>,

    /// Force the prefix selector on
    #[arg(long, conflicts_with = "no_si_prefix")]
    pub si_prefix: bool,

    /// Force the prefix selector off
    #[arg(long)]
    pub no_si_prefix: bool,

    /// Only accept whole numbers
    #[arg(long)]
    pub integer: bool,
}

/// Arguments for the split command.
#[derive(Debug, Parser)]
pub struct SplitArgs {
    /// Stored value (omit for an empty field)
    #[arg(allow_negative_numbers = true)]
    pub value: Option<f64>,

    #[command(flatten)]
    pub field: FieldArgs,

    /// CSS class list of the field, used for the compact-size flag
    #[arg(long)]
    pub class: Option<String>,
}

/// Arguments for the combine command.
#[derive(Debug, Parser)]
pub struct CombineArgs {
    /// Mantissa as typed into the form
    #[arg(allow_hyphen_values = true)]
    pub mantissa: String,

    /// Selected prefix (symbol, exponent or name)
    #[arg(short, long, allow_hyphen_values = true)]
    pub prefix: Option<String>,

    #[command(flatten)]
    pub field: FieldArgs,
}

/// Arguments for the format command.
#[derive(Debug, Parser)]
pub struct FormatArgs {
    /// Value to format
    #[arg(allow_negative_numbers = true)]
    pub value: f64,

    /// Measurement unit preset providing the symbol
    #[arg(short, long)]
    pub unit: Option<String>,

    /// Decimals (defaults to the configured value)
    #[arg(short, long)]
    pub decimals: Option<usize>,
}

/// Arguments for the parse command.
#[derive(Debug, Parser)]
pub struct ParseArgs {
    /// Prefixed input, e.g. "3.3 k" or "4.7µF"
    #[arg(allow_hyphen_values = true)]
    pub input: String,

    /// Measurement unit preset whose symbol may trail the input
    #[arg(short, long)]
    pub unit: Option<String>,
}

/// Arguments for unit preset management.
#[derive(Debug, Parser)]
pub struct UnitArgs {
    #[command(subcommand)]
    pub action: UnitAction,
}

/// Unit preset actions.
#[derive(Debug, Subcommand)]
pub enum UnitAction {
    /// List all presets
    List,

    /// Show one preset
    Show {
        /// Preset name
        name: String,
    },

    /// Create or update a preset
    Set {
        /// Preset name
        name: String,
        /// Display symbol
        #[arg(short, long)]
        symbol: Option<String>,
        /// Show values with an SI prefix
        #[arg(long)]
        si_prefix: bool,
        /// Only whole numbers
        #[arg(long)]
        integer: bool,
    },

    /// Delete a preset
    Delete {
        /// Preset name
        name: String,
    },
}

/// Arguments for the check-part command.
#[derive(Debug, Parser)]
pub struct CheckPartArgs {
    /// Part name
    #[arg(short, long)]
    pub name: String,

    /// Mass of a single unit in grams
    #[arg(short, long, allow_negative_numbers = true)]
    pub mass: Option<f64>,

    /// Comma-separated tags
    #[arg(short, long, default_value = "")]
    pub tags: String,

    /// Mark the part as needing review
    #[arg(long)]
    pub needs_review: bool,

    /// Validation preset (defaults to the configured rules)
    #[arg(long, value_enum)]
    pub rules: Option<RulesArg>,
}

/// Validation rule presets.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum RulesArg {
    /// Only the mass sign
    Permissive,
    /// Balanced defaults
    Default,
    /// Everything enabled
    Strict,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<RulesArg> for partdb_gatekeeper::ValidationConfig {
    fn from(rules: RulesArg) -> Self {
        match rules {
            RulesArg::Permissive => partdb_gatekeeper::ValidationConfig::permissive(),
            RulesArg::Default => partdb_gatekeeper::ValidationConfig::default(),
            RulesArg::Strict => partdb_gatekeeper::ValidationConfig::strict(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::parse_from(["partdb"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_split_command() {
        let cli = Cli::parse_from(["partdb", "split", "3300", "--unit", "ohm"]);
        match cli.command {
            Some(Command::Split(args)) => {
                assert_eq!(args.value, Some(3300.0));
                assert_eq!(args.field.unit.as_deref(), Some("ohm"));
            }
            _ => panic!("Expected Split command"),
        }
    }

    #[test]
    fn test_combine_negative_prefix() {
        let cli = Cli::parse_from(["partdb", "combine", "2.5", "--prefix", "-3", "--si-prefix"]);
        match cli.command {
            Some(Command::Combine(args)) => {
                assert_eq!(args.mantissa, "2.5");
                assert_eq!(args.prefix.as_deref(), Some("-3"));
                assert!(args.field.si_prefix);
            }
            _ => panic!("Expected Combine command"),
        }
    }

    #[test]
    fn test_conflicting_prefix_flags() {
        let result = Cli::try_parse_from([
            "partdb",
            "split",
            "1",
            "--si-prefix",
            "--no-si-prefix",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_check_part_command() {
        let cli = Cli::parse_from([
            "partdb",
            "check-part",
            "--name",
            "LED",
            "--mass",
            "-1",
            "--rules",
            "strict",
        ]);
        match cli.command {
            Some(Command::CheckPart(args)) => {
                assert_eq!(args.mass, Some(-1.0));
                assert!(matches!(args.rules, Some(RulesArg::Strict)));
            }
            _ => panic!("Expected CheckPart command"),
        }
    }
}
