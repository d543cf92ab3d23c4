//! Combine command implementation.

use super::build_field;
use crate::cli::CombineArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use partdb_forms::{DataMapper, SubmittedFields};

/// Execute the combine command.
///
/// A rejected mantissa is reported through the formatter and surfaces as
/// [`CliError::Field`].
pub fn execute_combine(args: CombineArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let field = build_field(&args.field, config)?;
    let submitted = SubmittedFields::new(args.mantissa, args.prefix.as_deref());

    match field.from_view(&submitted) {
        Ok(model) => {
            println!("{}", formatter.format_model(model, field.options().unit.as_deref())?);
            Ok(())
        }
        Err(err) => {
            println!("{}", formatter.format_field_error(&err)?);
            Err(CliError::Field(err))
        }
    }
}
