//! Logging infrastructure for the abspath library.
//!
//! The library itself only emits records through the `log` facade. This
//! module provides a simple stderr [`log::Log`] implementation with
//! configurable verbosity for binaries that want one.

use std::env;
use std::fmt;

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_VAR: &str = "ABSPATH_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use abspath::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all non-essential output.
    Quiet,
    /// Normal output level (errors and warnings).
    Normal,
    /// Verbose output (errors, warnings, info, debug and trace messages).
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use abspath::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("invalid").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The `log` filter matching this level.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Trace,
        }
    }
}

/// A simple stderr-based logger.
///
/// Records at or above the configured level are written as
/// `LEVEL: message` lines.
///
/// # Examples
///
/// ```
/// use abspath::{Logger, LogLevel};
/// use log::Log;
///
/// let logger = Logger::new(LogLevel::Normal);
/// assert!(logger.enabled(&log::Metadata::builder().level(log::Level::Error).build()));
/// assert!(!logger.enabled(&log::Metadata::builder().level(log::Level::Debug).build()));
/// ```
#[derive(Debug)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Register this logger as the global `log` backend.
    ///
    /// Only the first installation in a process takes effect; later calls
    /// are ignored.
    pub fn install(self) {
        let filter = self.level.filter();
        if log::set_boxed_logger(Box::new(self)).is_ok() {
            log::set_max_level(filter);
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level.filter()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Initializes a logger based on environment variables and CLI flags.
///
/// The priority order is:
/// 1. CLI flags (verbose/quiet)
/// 2. `ABSPATH_LOG_MODE` environment variable
/// 3. Default (Normal)
///
/// If both `verbose` and `quiet` are true, `verbose` takes precedence.
///
/// # Examples
///
/// ```
/// use abspath::{init_logger, LogLevel};
///
/// let logger = init_logger(true, false);
/// assert_eq!(logger.level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    if let Ok(env_value) = env::var(LOG_MODE_VAR) {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return Logger::new(level);
        }
    }

    Logger::new(LogLevel::Normal)
}
