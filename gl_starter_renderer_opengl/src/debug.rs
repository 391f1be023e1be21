/// OpenGL debug output - routes KHR_debug messages to the logger
///
/// Only installed when the `gl-debug` feature asks for a debug context.
/// Messages are counted per severity so a session can end with a short
/// report of what the driver complained about.

use std::sync::atomic::{AtomicU32, Ordering};

use gl_starter::glstarter::log::{self, LogSeverity};

/// Global debug statistics (thread-safe atomic counters)
static DEBUG_STATS: DebugStatsTracker = DebugStatsTracker::new();

/// Per-severity message counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebugMessageStats {
    pub high: u32,
    pub medium: u32,
    pub low: u32,
    pub notification: u32,
}

impl DebugMessageStats {
    pub fn total(&self) -> u32 {
        self.high + self.medium + self.low + self.notification
    }
}

struct DebugStatsTracker {
    high: AtomicU32,
    medium: AtomicU32,
    low: AtomicU32,
    notification: AtomicU32,
}

impl DebugStatsTracker {
    const fn new() -> Self {
        Self {
            high: AtomicU32::new(0),
            medium: AtomicU32::new(0),
            low: AtomicU32::new(0),
            notification: AtomicU32::new(0),
        }
    }

    fn increment(&self, severity: u32) {
        let counter = match severity {
            glow::DEBUG_SEVERITY_HIGH => &self.high,
            glow::DEBUG_SEVERITY_MEDIUM => &self.medium,
            glow::DEBUG_SEVERITY_LOW => &self.low,
            _ => &self.notification,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn get_stats(&self) -> DebugMessageStats {
        DebugMessageStats {
            high: self.high.load(Ordering::Relaxed),
            medium: self.medium.load(Ordering::Relaxed),
            low: self.low.load(Ordering::Relaxed),
            notification: self.notification.load(Ordering::Relaxed),
        }
    }
}

/// Counts of driver debug messages received so far
pub fn debug_message_stats() -> DebugMessageStats {
    DEBUG_STATS.get_stats()
}

/// Logger severity for a GL debug severity
pub(crate) fn log_severity(severity: u32) -> LogSeverity {
    match severity {
        glow::DEBUG_SEVERITY_HIGH => LogSeverity::Error,
        glow::DEBUG_SEVERITY_MEDIUM => LogSeverity::Warn,
        glow::DEBUG_SEVERITY_LOW => LogSeverity::Info,
        _ => LogSeverity::Trace,
    }
}

pub(crate) fn source_name(source: u32) -> &'static str {
    match source {
        glow::DEBUG_SOURCE_API => "API",
        glow::DEBUG_SOURCE_WINDOW_SYSTEM => "Window System",
        glow::DEBUG_SOURCE_SHADER_COMPILER => "Shader Compiler",
        glow::DEBUG_SOURCE_THIRD_PARTY => "Third Party",
        glow::DEBUG_SOURCE_APPLICATION => "Application",
        _ => "Other",
    }
}

pub(crate) fn type_name(message_type: u32) -> &'static str {
    match message_type {
        glow::DEBUG_TYPE_ERROR => "Error",
        glow::DEBUG_TYPE_DEPRECATED_BEHAVIOR => "Deprecated",
        glow::DEBUG_TYPE_UNDEFINED_BEHAVIOR => "Undefined Behavior",
        glow::DEBUG_TYPE_PORTABILITY => "Portability",
        glow::DEBUG_TYPE_PERFORMANCE => "Performance",
        _ => "Other",
    }
}

/// Handle one driver message.
pub(crate) fn handle_debug_message(source: u32, message_type: u32, id: u32, severity: u32, message: &str) {
    DEBUG_STATS.increment(severity);
    log::log(
        log_severity(severity),
        "glstarter::opengl::debug",
        format!("[{}/{}] #{}: {}", source_name(source), type_name(message_type), id, message),
    );
}

/// Enable synchronous debug output and route it to the logger.
#[cfg(feature = "gl-debug")]
pub(crate) fn install_debug_callback(gl: &mut glow::Context) {
    use glow::HasContext;

    unsafe {
        if !gl.supports_debug() {
            gl_starter::starter_warn!("glstarter::opengl", "Debug output not supported by this context");
            return;
        }
        gl.enable(glow::DEBUG_OUTPUT);
        gl.enable(glow::DEBUG_OUTPUT_SYNCHRONOUS);
        gl.debug_message_callback(handle_debug_message);
    }
    gl_starter::starter_info!("glstarter::opengl", "OpenGL debug output enabled");
}

#[cfg(test)]
#[path = "debug_tests.rs"]
mod tests;
