//! Command-line interface for nestcheck
//!
//! Usage:
//!   nestcheck `<path>` [--format `<format>`] [--config `<file>`] [--void `<name>`]... [--strict]
//!   nestcheck --list-formats
//!
//! The report goes to stdout. Exit status is 0 whenever the scan completes,
//! 2 with `--strict` when defects were reported, and 1 when the input,
//! configuration or format cannot be used.

use clap::{Arg, ArgAction, ArgMatches, Command};
use nestcheck::nestcheck::config::Loader;
use nestcheck::nestcheck::formats::{FormatError, FormatRegistry};
use nestcheck::nestcheck::{check_input, NestcheckError};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let matches = Command::new("nestcheck")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Check that markup-like tags in a file are properly nested and closed")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("File to check ('-' reads standard input)")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Report format (e.g., 'text', 'json'); defaults to the configured format"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("void")
                .long("void")
                .help("Additional void element that never needs a closing tag")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Exit with status 2 when any defect is reported")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log scan details to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available report formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return ExitCode::SUCCESS;
    }

    match handle_check_command(&matches) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout carries only the report
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Handle the default check command
fn handle_check_command(matches: &ArgMatches) -> Result<ExitCode, NestcheckError> {
    let Some(path) = matches.get_one::<String>("path") else {
        return Ok(ExitCode::SUCCESS);
    };

    let mut loader = Loader::new();
    if let Some(config_path) = matches.get_one::<String>("config") {
        loader = loader.with_file(config_path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if matches.get_flag("strict") {
        loader = loader.set_override("output.strict", true)?;
    }
    let mut config = loader.build()?;

    if let Some(extra_void) = matches.get_many::<String>("void") {
        config.add_void_elements(extra_void);
    }
    let checker = config.checker();

    // Resolve the format before reading so a bad name fails fast
    let registry = FormatRegistry::with_defaults();
    let Some(formatter) = registry.get(&config.output.format) else {
        eprintln!("Available formats: {}", registry.list_formats().join(", "));
        return Err(FormatError::FormatNotFound(config.output.format.clone()).into());
    };

    tracing::info!(path = %path, format = formatter.name(), "checking nesting");
    let report = check_input(&checker, path)?;
    print!("{}", formatter.render(&report)?);

    if config.output.strict && !report.is_clean() {
        tracing::info!(
            defects = report.defect_count(),
            aborted = report.is_aborted(),
            "strict mode, failing run"
        );
        return Ok(ExitCode::from(2));
    }
    Ok(ExitCode::SUCCESS)
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available report formats:\n");

    for name in registry.list_formats() {
        if let Some(formatter) = registry.get(&name) {
            println!("  {}", name);
            println!("    {}", formatter.description());
            println!();
        }
    }
}
