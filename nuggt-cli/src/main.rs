//! Command-line interface for nuggt
//!
//! Inspects, converts and reformats nuggt layout documents.
//!
//! Usage:
//!   nuggt inspect `<path>` [--format `<format>`]            - Parse DSL and print the document
//!   nuggt convert `<path>` --to `<format>` [--from `<format>`] - Convert between formats
//!   nuggt format `<path>`                                  - Print the DSL in canonical form
//!   nuggt --list-formats                                   - List available formats
//!
//! A `<path>` of `-` reads standard input. Configuration comes from the embedded defaults,
//! then `./nuggt.toml` if present, or the file given with `--config`.

mod error;

use clap::{Arg, ArgAction, ArgMatches, Command};
use error::CliError;
use nuggt_babel::formats::NuggtFormat;
use nuggt_babel::FormatRegistry;
use nuggt_config::{Loader, NuggtConfig};
use std::io::Read;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const STDIN_PATH: &str = "-";
const LOCAL_CONFIG: &str = "nuggt.toml";
const DSL_FORMAT: &str = "nuggt";

fn build_cli() -> Command {
    let path_arg = || {
        Arg::new("path")
            .help("Path to the input file, or - for standard input")
            .required(true)
            .index(1)
    };

    Command::new("nuggt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and converting nuggt layout documents")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log debug output to stderr"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("inspect")
                .about("Parse a DSL document and print it in an inspection format")
                .arg(path_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (default: output.default_format from the config)"),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a document from one format to another")
                .arg(path_arg())
                .arg(
                    Arg::new("to")
                        .long("to")
                        .short('t')
                        .required(true)
                        .help("Target format"),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (default: inferred from the file extension)"),
                ),
        )
        .subcommand(
            Command::new("format")
                .about("Parse a DSL document and print it back in canonical form")
                .arg(path_arg()),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    if let Err(error) = run(&matches) {
        eprintln!("Error: {}", error);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let config = load_config(matches.get_one::<String>("config"))?;
    init_logging(&config, matches.get_flag("verbose"));
    let registry = build_registry(&config);

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return Ok(());
    }

    let output = match matches.subcommand() {
        Some(("inspect", sub)) => {
            let format = sub
                .get_one::<String>("format")
                .map(String::as_str)
                .unwrap_or(&config.output.default_format);
            handle_inspect_command(&registry, required_path(sub), format)?
        }
        Some(("convert", sub)) => handle_convert_command(
            &registry,
            required_path(sub),
            sub.get_one::<String>("from").map(String::as_str),
            sub.get_one::<String>("to").map(String::as_str).unwrap_or(DSL_FORMAT),
        )?,
        Some(("format", sub)) => {
            handle_convert_command(&registry, required_path(sub), Some(DSL_FORMAT), DSL_FORMAT)?
        }
        _ => return Ok(()),
    };

    print!("{}", output);
    Ok(())
}

fn required_path(matches: &ArgMatches) -> &str {
    matches
        .get_one::<String>("path")
        .map(String::as_str)
        .unwrap_or(STDIN_PATH)
}

/// Defaults, then `--config` if given, else `./nuggt.toml` when it exists.
fn load_config(explicit: Option<&String>) -> Result<NuggtConfig, CliError> {
    let loader = match explicit {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file(LOCAL_CONFIG),
    };
    Ok(loader.build()?)
}

/// `RUST_LOG` wins over the configured level; `--verbose` wins over both.
fn init_logging(config: &NuggtConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.output.log_level))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// The default registry, with the DSL format carrying the configured options.
fn build_registry(config: &NuggtConfig) -> FormatRegistry {
    let mut registry = FormatRegistry::with_defaults();
    registry.register(NuggtFormat::new(
        config.to_parse_options(),
        config.to_serialize_options(),
    ));
    registry
}

fn read_input(path: &str) -> Result<String, CliError> {
    let result = if path == STDIN_PATH {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source).map(|_| source)
    } else {
        std::fs::read_to_string(path)
    };

    result.map_err(|source| CliError::Read {
        path: path.to_string(),
        source,
    })
}

/// Handle the inspect command
fn handle_inspect_command(
    registry: &FormatRegistry,
    path: &str,
    format: &str,
) -> Result<String, CliError> {
    let source = read_input(path)?;
    Ok(registry.convert(&source, DSL_FORMAT, format)?)
}

/// Handle the convert command
fn handle_convert_command(
    registry: &FormatRegistry,
    path: &str,
    from: Option<&str>,
    to: &str,
) -> Result<String, CliError> {
    let from = from
        .or_else(|| registry.detect_format(Path::new(path)))
        .unwrap_or(DSL_FORMAT);
    debug!(path, from, to, "converting");

    let source = read_input(path)?;
    Ok(registry.convert(&source, from, to)?)
}

/// Handle the list-formats command
fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available formats:\n");

    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            let directions = match (format.supports_parsing(), format.supports_serialization()) {
                (true, true) => "read, write",
                (true, false) => "read",
                (false, true) => "write",
                (false, false) => "none",
            };
            println!("  {} ({})", name, directions);
            println!("    {}", format.description());
            println!();
        }
    }
}
