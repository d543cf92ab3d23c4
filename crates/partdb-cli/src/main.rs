//! PartDB CLI - Convert SI-prefixed part values and validate part records.

use clap::Parser;
use partdb_cli::commands;
use partdb_cli::repl;
use partdb_cli::{Cli, Command, Config, Formatter};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so stdout stays parseable in json/quiet mode
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("PARTDB_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        if !e.is_reported() {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn run() -> partdb_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => PathBuf::from(path),
        None => Config::path()?,
    };
    let mut config = Config::load_from(&config_path)?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        None | Some(Command::Repl) => repl::run_repl(&mut config, &config_path, &formatter)?,
        Some(Command::Split(args)) => commands::execute_split(args, &config, &formatter)?,
        Some(Command::Combine(args)) => commands::execute_combine(args, &config, &formatter)?,
        Some(Command::Format(args)) => commands::execute_format(args, &config, &formatter)?,
        Some(Command::Parse(args)) => commands::execute_parse(args, &config, &formatter)?,
        Some(Command::Prefixes) => commands::execute_prefixes(&formatter)?,
        Some(Command::Unit(args)) => {
            commands::execute_unit(args, &mut config, &config_path, &formatter)?
        }
        Some(Command::CheckPart(args)) => {
            commands::execute_check_part(args, &config, &formatter)?
        }
    }

    Ok(())
}
