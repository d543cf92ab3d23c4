//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::cli::{
    CheckPartArgs, Command, CombineArgs, FieldArgs, FormatArgs, ParseArgs, RulesArg, SplitArgs,
    UnitAction, UnitArgs,
};
use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use clap::ValueEnum;
use rustyline::error::ReadlineError;
use rustyline::{Config as EditorConfig, DefaultEditor};
use std::path::{Path, PathBuf};

/// Run the interactive REPL.
pub fn run_repl(config: &mut Config, config_path: &Path, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.info("PartDB REPL - Type 'help' for commands, 'exit' to quit"));
    println!();

    let editor_config = EditorConfig::builder()
        .max_history_size(config.settings.history_size)?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config)?;

    // Load history
    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        match editor.readline("partdb> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(ReplCommand::Command(cmd)) => {
                        if let Err(e) = execute_repl_command(cmd, config, config_path, formatter) {
                            if !e.is_reported() {
                                eprintln!("{}", formatter.error(&e.to_string()));
                            }
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    // Save history
    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug)]
enum ReplCommand {
    Exit,
    Help,
    Command(Command),
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.is_empty() {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    }

    match parts[0] {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "split" => parse_split_command(&parts[1..]),
        "combine" => parse_combine_command(&parts[1..]),
        "format" => parse_format_command(&parts[1..]),
        "parse" => parse_parse_command(&parts[1..]),
        "prefixes" => Ok(ReplCommand::Command(Command::Prefixes)),
        "unit" | "units" => parse_unit_command(&parts[1..]),
        "check" => parse_check_command(&parts[1..]),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            parts[0]
        ))),
    }
}

/// Execute a REPL command.
fn execute_repl_command(
    cmd: Command,
    config: &mut Config,
    config_path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match cmd {
        Command::Split(args) => commands::execute_split(args, config, formatter),
        Command::Combine(args) => commands::execute_combine(args, config, formatter),
        Command::Format(args) => commands::execute_format(args, config, formatter),
        Command::Parse(args) => commands::execute_parse(args, config, formatter),
        Command::Prefixes => commands::execute_prefixes(formatter),
        Command::Unit(args) => commands::execute_unit(args, config, config_path, formatter),
        Command::CheckPart(args) => commands::execute_check_part(args, config, formatter),
        Command::Repl => Err(CliError::InvalidInput("Already in REPL mode".to_string())),
    }
}

// Simple command parsers for REPL (positional arguments only)

fn field_args(unit: Option<&&str>) -> FieldArgs {
    FieldArgs {
        unit: unit.map(|s| s.to_string()),
        ..FieldArgs::default()
    }
}

fn parse_number(arg: &str) -> Result<f64> {
    arg.parse()
        .map_err(|_| CliError::InvalidInput(format!("Not a number: {}", arg)))
}

/// Remove `flag` from the arguments, reporting whether it was present.
fn take_flag(args: &mut Vec<&str>, flag: &str) -> bool {
    match args.iter().position(|arg| *arg == flag) {
        Some(index) => {
            args.remove(index);
            true
        }
        None => false,
    }
}

/// Remove `flag` and the value following it.
fn take_option<'a>(args: &mut Vec<&'a str>, flag: &str) -> Result<Option<&'a str>> {
    let index = match args.iter().position(|arg| *arg == flag) {
        Some(index) => index,
        None => return Ok(None),
    };
    if index + 1 >= args.len() {
        return Err(CliError::InvalidInput(format!("{} needs a value", flag)));
    }
    let value = args.remove(index + 1);
    args.remove(index);
    Ok(Some(value))
}

fn parse_split_command(args: &[&str]) -> Result<ReplCommand> {
    let mut args = args.to_vec();

    // Everything after --class is the class list
    let class = match args.iter().position(|arg| *arg == "--class") {
        Some(index) => {
            let classes = args.split_off(index + 1);
            args.truncate(index);
            Some(classes.join(" "))
        }
        None => None,
    };

    if args.is_empty() {
        return Err(CliError::InvalidInput(
            "Usage: split <value|-> [unit] [--class <classes...>]".to_string(),
        ));
    }

    // "-" stands for an empty field
    let value = match args[0] {
        "-" => None,
        value => Some(parse_number(value)?),
    };

    Ok(ReplCommand::Command(Command::Split(SplitArgs {
        value,
        field: field_args(args.get(1)),
        class,
    })))
}

fn parse_combine_command(args: &[&str]) -> Result<ReplCommand> {
    if args.is_empty() {
        return Err(CliError::InvalidInput(
            "Usage: combine <mantissa> [prefix] [unit]".to_string(),
        ));
    }

    Ok(ReplCommand::Command(Command::Combine(CombineArgs {
        mantissa: args[0].to_string(),
        prefix: args.get(1).map(|s| s.to_string()),
        field: field_args(args.get(2)),
    })))
}

fn parse_format_command(args: &[&str]) -> Result<ReplCommand> {
    if args.is_empty() {
        return Err(CliError::InvalidInput("Usage: format <value> [unit]".to_string()));
    }

    Ok(ReplCommand::Command(Command::Format(FormatArgs {
        value: parse_number(args[0])?,
        unit: args.get(1).map(|s| s.to_string()),
        decimals: None,
    })))
}

fn parse_parse_command(args: &[&str]) -> Result<ReplCommand> {
    if args.is_empty() {
        return Err(CliError::InvalidInput("Usage: parse <input> [unit]".to_string()));
    }

    Ok(ReplCommand::Command(Command::Parse(ParseArgs {
        input: args[0].to_string(),
        unit: args.get(1).map(|s| s.to_string()),
    })))
}

fn parse_check_command(args: &[&str]) -> Result<ReplCommand> {
    let mut args = args.to_vec();
    let needs_review = take_flag(&mut args, "--needs-review");
    let rules = take_option(&mut args, "--rules")?
        .map(|preset| {
            RulesArg::from_str(preset, true)
                .map_err(|_| CliError::InvalidInput(format!("Unknown rules preset: {}", preset)))
        })
        .transpose()?;

    if args.is_empty() {
        return Err(CliError::InvalidInput(
            "Usage: check <name> [mass|-] [tags|-] [--needs-review] [--rules <preset>]"
                .to_string(),
        ));
    }

    let mass = match args.get(1) {
        None | Some(&"-") => None,
        Some(mass) => Some(parse_number(mass)?),
    };
    let tags = match args.get(2) {
        None | Some(&"-") => String::new(),
        Some(tags) => tags.to_string(),
    };

    Ok(ReplCommand::Command(Command::CheckPart(CheckPartArgs {
        name: args[0].to_string(),
        mass,
        tags,
        needs_review,
        rules,
    })))
}

fn parse_unit_command(args: &[&str]) -> Result<ReplCommand> {
    let mut args = args.to_vec();
    let si_prefix = take_flag(&mut args, "--si-prefix");
    let integer = take_flag(&mut args, "--integer");

    let name = |action: &str| -> Result<String> {
        args.get(1).map(|s| s.to_string()).ok_or_else(|| {
            CliError::InvalidInput(format!("Usage: unit {} <name>", action))
        })
    };

    let action = match args.first().copied() {
        None | Some("list") => UnitAction::List,
        Some("show") => UnitAction::Show { name: name("show")? },
        Some("delete") => UnitAction::Delete {
            name: name("delete")?,
        },
        Some("set") => UnitAction::Set {
            name: name("set")?,
            symbol: args
                .get(2)
                .filter(|symbol| **symbol != "-")
                .map(|symbol| symbol.to_string()),
            si_prefix,
            integer,
        },
        Some(other) => {
            return Err(CliError::InvalidInput(format!("Unknown unit action: {}", other)));
        }
    };

    Ok(ReplCommand::Command(Command::Unit(UnitArgs { action })))
}

fn get_history_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    let partdb_dir = home.join(".partdb");
    std::fs::create_dir_all(&partdb_dir)?;
    Ok(partdb_dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  split <value|-> [unit] [--class <classes...>]");
    println!("        Split a value into mantissa and prefix");
    println!("  combine <mantissa> [prefix] [unit]");
    println!("        Recombine a mantissa and prefix");
    println!("  format <value> [unit]            - Format with the best fitting prefix");
    println!("  parse <input> [unit]             - Parse a prefixed value such as 3.3k");
    println!("  prefixes                         - List SI prefixes");
    println!("  unit [list]                      - List unit presets");
    println!("  unit show <name>                 - Show one preset");
    println!("  unit set <name> [symbol|-] [--si-prefix] [--integer]");
    println!("        Create or update a preset");
    println!("  unit delete <name>               - Delete a preset");
    println!("  check <name> [mass|-] [tags|-] [--needs-review] [--rules <preset>]");
    println!("        Validate part properties (presets: permissive, default, strict)");
    println!("  help, ?                          - Show this help");
    println!("  exit, quit, q                    - Exit REPL");
    println!();
}
