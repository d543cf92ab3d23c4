//! Prefixes command implementation.

use crate::error::Result;
use crate::output::Formatter;

/// Execute the prefixes command.
pub fn execute_prefixes(formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_prefixes()?);
    Ok(())
}
