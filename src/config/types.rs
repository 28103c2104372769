//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_OVERPASS_URL, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

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
/// # Examples
///
/// ```no_run
/// use istanbul_churches::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     output_dir: PathBuf::from("./maps"),
///     with_buildings: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the HTML files are written to (and served from)
    pub output_dir: PathBuf,

    /// Overpass API interpreter endpoint
    pub overpass_url: String,

    /// Timeout of the main Overpass request in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Also generate the building footprints map
    pub with_buildings: bool,

    /// Also print the coverage analysis
    pub with_analysis: bool,

    /// Port of the local web server (next free port is used when taken)
    pub port: u16,

    /// Do not start the local web server
    pub no_serve: bool,

    /// Do not open the browser once the server is up
    pub no_browser: bool,

    /// Minimal console output
    pub quiet: bool,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            overpass_url: DEFAULT_OVERPASS_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            with_buildings: false,
            with_analysis: false,
            port: DEFAULT_PORT,
            no_serve: false,
            no_browser: false,
            quiet: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Effective log level: `--quiet` caps the configured level at `Warn`.
    pub fn effective_log_level(&self) -> log::LevelFilter {
        let level = log::LevelFilter::from(self.log_level.clone());
        if self.quiet {
            level.min(log::LevelFilter::Warn)
        } else {
            level
        }
    }
}

/// Command-line options.
#[derive(Debug, Parser)]
#[command(
    name = "istanbul_churches",
    about = "Istanbul churches maps generator and server"
)]
pub struct Opt {
    /// Port to serve on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Don't open browser automatically
    #[arg(long)]
    pub no_browser: bool,

    /// Generate the maps and exit without starting the server
    #[arg(long)]
    pub no_serve: bool,

    /// Also generate buildings map
    #[arg(long)]
    pub with_buildings: bool,

    /// Also generate coverage analysis
    #[arg(long)]
    pub with_analysis: bool,

    /// Quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Directory to write the HTML files to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Overpass API interpreter endpoint
    #[arg(long, env = "OVERPASS_URL", default_value = DEFAULT_OVERPASS_URL)]
    pub overpass_url: String,

    /// Timeout of the main Overpass request in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            output_dir: opt.output_dir,
            overpass_url: opt.overpass_url,
            timeout_seconds: opt.timeout_seconds,
            user_agent: opt.user_agent,
            with_buildings: opt.with_buildings,
            with_analysis: opt.with_analysis,
            port: opt.port,
            no_serve: opt.no_serve,
            no_browser: opt.no_browser,
            quiet: opt.quiet,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}
