//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::ValueEnum;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// Describes where a website's assets come from and how the run is logged.
/// Either `website` (a JSON manifest) or the `css`/`js` file lists are used;
/// when a manifest is given the file lists are ignored.
///
/// # Examples
///
/// ```no_run
/// use touch_check::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     css: vec![PathBuf::from("site.css")],
///     js: vec![PathBuf::from("app.js")],
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON manifest describing the website (`{"css": [...], "js": [...]}`)
    pub website: Option<PathBuf>,

    /// Stylesheets to lint, in order
    pub css: Vec<PathBuf>,

    /// Scripts to scan, in order
    pub js: Vec<PathBuf>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Print the result as JSON instead of a human-readable line
    pub json_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            website: None,
            css: Vec::new(),
            js: Vec::new(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            json_output: false,
        }
    }
}
