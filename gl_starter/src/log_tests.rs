//! Unit tests for log.rs
//!
//! Tests Logger trait, LogEntry, LogSeverity, DefaultLogger and the severity filter.

use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
use std::sync::{Arc, Mutex};
use std::time::SystemTime;
use serial_test::serial;

fn entry(severity: LogSeverity, file: Option<&'static str>, line: Option<u32>) -> LogEntry {
    LogEntry {
        severity,
        timestamp: SystemTime::now(),
        source: "glstarter::shader".to_string(),
        message: "Program 3 linked".to_string(),
        file,
        line,
    }
}

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_labels_are_fixed_width() {
    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        assert_eq!(severity.label().len(), 5);
    }
    assert_eq!(LogSeverity::Warn.label(), "WARN ");
}

// ============================================================================
// LOG ENTRY TESTS
// ============================================================================

#[test]
fn test_log_entry_clone() {
    let entry1 = entry(LogSeverity::Warn, Some("compiler.rs"), Some(10));
    let entry2 = entry1.clone();

    assert_eq!(entry1.severity, entry2.severity);
    assert_eq!(entry1.source, entry2.source);
    assert_eq!(entry1.message, entry2.message);
    assert_eq!(entry1.file, entry2.file);
    assert_eq!(entry1.line, entry2.line);
}

// ============================================================================
// DEFAULT LOGGER TESTS
// ============================================================================

#[test]
fn test_default_logger_format_without_file_line() {
    let line = DefaultLogger::format_entry(&entry(LogSeverity::Info, None, None));
    assert!(line.contains("[INFO ]"));
    assert!(line.contains("[glstarter::shader]"));
    assert!(line.ends_with("Program 3 linked"));
}

#[test]
fn test_default_logger_format_with_file_line() {
    let line = DefaultLogger::format_entry(&entry(LogSeverity::Error, Some("compiler.rs"), Some(42)));
    assert!(line.contains("[ERROR]"));
    assert!(line.ends_with("(compiler.rs:42)"));
}

#[test]
fn test_default_logger_does_not_panic() {
    let logger = DefaultLogger;
    logger.log(&entry(LogSeverity::Trace, None, None));
    logger.log(&entry(LogSeverity::Error, Some("log.rs"), Some(1)));
}

// ============================================================================
// GLOBAL LOGGER TESTS
// ============================================================================

struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        // Other unit tests log concurrently from their own threads
        if entry.source == "glstarter::test" {
            self.entries.lock().unwrap().push(entry.clone());
        }
    }
}

#[test]
#[serial]
fn test_min_severity_filters_entries() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    crate::log::set_logger(CaptureLogger { entries: entries.clone() });
    crate::log::set_min_severity(LogSeverity::Warn);

    crate::starter_debug!("glstarter::test", "dropped");
    crate::starter_warn!("glstarter::test", "kept {}", 1);
    crate::starter_error!("glstarter::test", "kept {}", 2);

    crate::log::set_min_severity(LogSeverity::Trace);
    crate::log::reset_logger();

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 2);
    assert_eq!(captured[0].message, "kept 1");
    assert!(captured[0].file.is_none());
    assert_eq!(captured[1].severity, LogSeverity::Error);
    assert!(captured[1].file.is_some());
    assert!(captured[1].line.is_some());
}

#[test]
#[serial]
fn test_starter_err_logs_and_builds_backend_error() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    crate::log::set_logger(CaptureLogger { entries: entries.clone() });

    let err = crate::starter_err!("glstarter::test", "driver said {}", "no");

    crate::log::reset_logger();

    assert!(matches!(err, crate::error::Error::BackendError(ref m) if m == "driver said no"));
    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].message, "driver said no");
}
