//! Internal logging system for GL Starter
//!
//! This module provides a small, pluggable logging system with:
//! - Customizable logger via Logger trait
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Minimum severity filter
//! - Colored console output by default
//! - File and line information for ERROR logs

use colored::*;
use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom logging implementations
///
/// Implement this trait to redirect starter logs (file logging, test capture, etc.)
///
/// # Example
///
/// ```no_run
/// use gl_starter::glstarter::log::{Logger, LogEntry};
///
/// struct FileLogger {
///     file: std::fs::File,
/// }
///
/// impl Logger for FileLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Write to file...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level (Trace, Debug, Info, Warn, Error)
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source component (e.g., "glstarter::shader", "glstarter::opengl")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Very verbose information (include expansion, unresolved uniforms)
    Trace,

    /// Development/debugging information
    Debug,

    /// Important informational messages
    Info,

    /// Warning messages (potential issues)
    Warn,

    /// Error messages (with file:line details)
    Error,
}

impl LogSeverity {
    /// Fixed-width label used by the default logger.
    pub fn label(&self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }
}

/// Default logger implementation using colored console output
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl DefaultLogger {
    /// Render an entry as a single uncolored line.
    pub fn format_entry(entry: &LogEntry) -> String {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f");

        match (entry.file, entry.line) {
            (Some(file), Some(line)) => format!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp, entry.severity.label(), entry.source, entry.message, file, line
            ),
            _ => format!(
                "[{}] [{}] [{}] {}",
                timestamp, entry.severity.label(), entry.source, entry.message
            ),
        }
    }
}

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let severity_str = match entry.severity {
            LogSeverity::Trace => entry.severity.label().bright_black(),
            LogSeverity::Debug => entry.severity.label().cyan(),
            LogSeverity::Info => entry.severity.label().green(),
            LogSeverity::Warn => entry.severity.label().yellow(),
            LogSeverity::Error => entry.severity.label().red().bold(),
        };

        let source = entry.source.bright_blue();

        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            eprintln!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp, severity_str, source, entry.message, file, line
            );
        } else {
            println!("[{}] [{}] [{}] {}", timestamp, severity_str, source, entry.message);
        }
    }
}

// ===== GLOBAL LOGGER =====

/// Active logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Minimum severity forwarded to the logger
static MIN_SEVERITY: RwLock<LogSeverity> = RwLock::new(LogSeverity::Trace);

fn logger() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
}

/// Replace the active logger
pub fn set_logger<L: Logger + 'static>(logger_impl: L) {
    if let Ok(mut lock) = logger().write() {
        *lock = Box::new(logger_impl);
    }
}

/// Reset logger to default (DefaultLogger)
pub fn reset_logger() {
    if let Ok(mut lock) = logger().write() {
        *lock = Box::new(DefaultLogger);
    }
}

/// Drop entries below `severity`
pub fn set_min_severity(severity: LogSeverity) {
    if let Ok(mut lock) = MIN_SEVERITY.write() {
        *lock = severity;
    }
}

/// Current minimum severity
pub fn min_severity() -> LogSeverity {
    MIN_SEVERITY.read().map(|s| *s).unwrap_or(LogSeverity::Trace)
}

fn dispatch(entry: LogEntry) {
    if entry.severity < min_severity() {
        return;
    }
    if let Ok(lock) = logger().read() {
        lock.log(&entry);
    }
}

/// Log a message without file:line (used by starter_trace! .. starter_warn!)
pub fn log(severity: LogSeverity, source: &str, message: String) {
    dispatch(LogEntry {
        severity,
        timestamp: SystemTime::now(),
        source: source.to_string(),
        message,
        file: None,
        line: None,
    });
}

/// Log a message with file:line information (used by starter_error!)
pub fn log_detailed(
    severity: LogSeverity,
    source: &str,
    message: String,
    file: &'static str,
    line: u32,
) {
    dispatch(LogEntry {
        severity,
        timestamp: SystemTime::now(),
        source: source.to_string(),
        message,
        file: Some(file),
        line: Some(line),
    });
}

// ===== LOGGING MACROS =====

/// Log a TRACE message (very verbose)
#[macro_export]
macro_rules! starter_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::glstarter::log::log(
            $crate::glstarter::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message (development information)
#[macro_export]
macro_rules! starter_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::glstarter::log::log(
            $crate::glstarter::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message (important events)
///
/// # Example
///
/// ```no_run
/// gl_starter::starter_info!("glstarter::opengl", "Context created: {}", "4.3 core");
/// ```
#[macro_export]
macro_rules! starter_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::glstarter::log::log(
            $crate::glstarter::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message (potential issues)
#[macro_export]
macro_rules! starter_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::glstarter::log::log(
            $crate::glstarter::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
#[macro_export]
macro_rules! starter_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::glstarter::log::log_detailed(
            $crate::glstarter::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

/// Log an ERROR and evaluate to `Error::BackendError` carrying the same message
///
/// # Example
///
/// ```no_run
/// # fn f() -> gl_starter::glstarter::Result<()> {
/// let handle: Result<u32, String> = Err("out of handles".into());
/// let handle = handle.map_err(|e| gl_starter::starter_err!("glstarter::opengl", "create failed: {}", e))?;
/// # Ok(()) }
/// ```
#[macro_export]
macro_rules! starter_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::glstarter::log::log_detailed(
            $crate::glstarter::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!()
        );
        $crate::glstarter::Error::BackendError(message)
    }};
}

/// Log an ERROR and return `Err(Error::BackendError)` from the enclosing function
#[macro_export]
macro_rules! starter_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::starter_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
