//! Split command implementation.

use super::build_field;
use crate::cli::SplitArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use partdb_forms::DataMapper;

/// Execute the split command.
pub fn execute_split(args: SplitArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let field = build_field(&args.field, config)?;

    let view = field.to_view(args.value);
    let vars = field.build_view(args.class.as_deref());

    println!("{}", formatter.format_split(args.value, &view, &vars)?);
    Ok(())
}
