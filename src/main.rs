//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `touch_check` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use touch_check::initialization::init_logger_with;
use touch_check::{run_check, Config, LogFormat, LogLevel};

/// Check local CSS/JS assets for legacy touch and pointer API usage.
#[derive(Debug, Parser)]
#[command(name = "touch_check", version)]
struct Cli {
    /// JSON manifest: {"css": [{"report": {...}}], "js": [{"content": "..."}]}
    #[arg(long, conflicts_with_all = ["css", "js"])]
    website: Option<PathBuf>,

    /// Stylesheet to lint (repeatable, evaluated in order)
    #[arg(long)]
    css: Vec<PathBuf>,

    /// Script to scan (repeatable, evaluated in order)
    #[arg(long)]
    js: Vec<PathBuf>,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            website: cli.website,
            css: cli.css,
            js: cli.js,
            log_level: cli.log_level,
            log_format: cli.log_format,
            json_output: cli.json,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config: Config = Cli::parse().into();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_check(&config).await {
        Ok(result) => {
            if config.json_output {
                let json = serde_json::to_string(&result).context("Failed to serialize result")?;
                println!("{json}");
            } else {
                println!(
                    "{} {}",
                    result.test_name,
                    if result.passed { "passed" } else { "failed" }
                );
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("touch_check error: {:#}", e);
            process::exit(1);
        }
    }
}
