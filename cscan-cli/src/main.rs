//! cscan CLI - Command-line driver for the cscan lexical scanner.
//!
//! This is the main entry point for the cscan CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{common::OutputArgs, run_demo, run_lex, LexArgs};
use config::Config;
use error::{CscanError, Result};

/// cscan - Tokenize C-like source code
///
/// Prints one token per line with its kind, text and position.
#[derive(Parser, Debug)]
#[command(name = "cscan")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize C-like source code", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "CSCAN_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CSCAN_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "CSCAN_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the cscan CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenize source files
    ///
    /// Reads each file, or stdin when no file or `-` is given, and prints
    /// its tokens. Warnings go to stderr.
    Lex(LexCommand),

    /// Tokenize the built-in sample program
    Demo(DemoCommand),
}

/// Output flags shared by the subcommands.
#[derive(Args, Debug)]
struct OutputFlags {
    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Exit with an error if any warning is reported
    #[arg(long)]
    strict: bool,

    /// Do not print warnings
    #[arg(long)]
    no_diagnostics: bool,

    /// Drop warnings with this code (repeatable), e.g. W1003
    #[arg(short = 'A', long = "allow", value_name = "CODE")]
    allow: Vec<String>,
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// Input files (`-` for stdin)
    files: Vec<PathBuf>,

    #[command(flatten)]
    output: OutputFlags,
}

/// Arguments for the demo subcommand.
#[derive(Parser, Debug)]
struct DemoCommand {
    #[command(flatten)]
    output: OutputFlags,
}

impl From<OutputFlags> for OutputArgs {
    fn from(flags: OutputFlags) -> Self {
        Self {
            format: flags.format,
            strict: flags.strict,
            no_diagnostics: flags.no_diagnostics,
            allow: flags.allow,
        }
    }
}

/// Main entry point for the cscan CLI.
fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        },
    }
}

/// Loads configuration, initializes logging, and dispatches to the
/// appropriate command handler.
fn run(cli: Cli) -> Result<()> {
    // Configuration first, it may turn on verbose logging
    let config = load_config(cli.config.as_deref())?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    execute_command(cli.command, &config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so that stdout only carries tokens.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| CscanError::Logging(e.to_string()))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Lex(args) => run_lex(
            LexArgs {
                files: args.files,
                output: args.output.into(),
            },
            config,
        ),
        Commands::Demo(args) => run_demo(args.output.into(), config),
    }
}
