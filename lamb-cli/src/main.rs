//! Lamb CLI - Command line interface
//!
//! Reads a source file (or stdin) and prints its token stream.

use clap::Parser;
use std::path::PathBuf;
use std::process;

mod config;
mod error;
mod logging;
mod platform;

use crate::config::{load_driver_config, LogConfig};
use crate::error::CliError;
use crate::logging::LogFormat;
use crate::platform::{print_error_with_source, print_tokens, read_source};
use lamb_config::{DriverConfig, LogLevel, OutputFormat};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "lamb",
    about = "Lamb expression language - token stream printer",
    version = "0.1.0"
)]
struct Cli {
    /// Source file to tokenize (default: stdin)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Configuration file path (default: ./lamb.json if present)
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Token output format: "text" or "json"
    #[arg(long)]
    format: Option<String>,

    /// Log level: "silent", "error", "warn", "info", "debug", "trace"
    #[arg(long)]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,
}

fn main() {
    let cli = Cli::parse();

    let driver = match build_driver_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    logging::init(&LogConfig::from_driver(&driver), cli.log_format);
    debug!(target: "lamb::cli", config = ?driver, "Driver configured");

    let source = match read_source(cli.file.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let stdout = std::io::stdout();
    if let Err(e) = print_tokens(&source, driver.output, &mut stdout.lock()) {
        match &e {
            CliError::Lex(lex) => print_error_with_source(lex, &source),
            other => eprintln!("Error: {}", other),
        }
        process::exit(1);
    }
}

/// Merge the config file with command-line overrides
fn build_driver_config(cli: &Cli) -> Result<DriverConfig, CliError> {
    let mut config = load_driver_config(cli.config.as_deref())?;

    if let Some(format) = &cli.format {
        config.output = OutputFormat::parse(format).ok_or_else(|| CliError::InvalidOption {
            option: "format",
            value: format.clone(),
        })?;
    }

    if let Some(level) = &cli.log_level {
        config.log_level = LogLevel::parse(level).ok_or_else(|| CliError::InvalidOption {
            option: "log-level",
            value: level.clone(),
        })?;
    }

    Ok(config)
}
