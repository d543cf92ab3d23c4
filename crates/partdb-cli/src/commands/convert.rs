//! Format and parse command implementations.

use super::preset_symbol;
use crate::cli::{FormatArgs, ParseArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use partdb_forms::SiFormatter;

/// Execute the format command.
pub fn execute_format(args: FormatArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let si = SiFormatter::new(config.prefix_policy()?);
    let symbol = preset_symbol(config, args.unit.as_deref())?;
    let decimals = args.decimals.unwrap_or(config.settings.decimals);

    let text = si.format(args.value, symbol.as_deref(), decimals);
    println!("{}", formatter.format_text("formatted", &text)?);
    Ok(())
}

/// Execute the parse command.
pub fn execute_parse(args: ParseArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let si = SiFormatter::new(config.prefix_policy()?);
    let symbol = preset_symbol(config, args.unit.as_deref())?;

    let value = si.parse(&args.input, symbol.as_deref())?;
    println!("{}", formatter.format_text("value", &value.to_string())?);
    Ok(())
}
