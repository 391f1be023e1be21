//! Error types for GL Starter
//!
//! This module defines the error types used throughout the starter kit,
//! including file loading, shader preprocessing, program building and
//! backend (window/context) failures.

use std::fmt;
use std::path::PathBuf;
use crate::shader::ShaderDiagnostic;

/// Result type for GL Starter operations
pub type Result<T> = std::result::Result<T, Error>;

/// GL Starter errors
#[derive(Debug, Clone)]
pub enum Error {
    /// A file is missing, unreadable or not valid UTF-8
    FileReadFailure {
        /// Path that was requested
        path: PathBuf,
        /// Reason reported by the filesystem
        reason: String,
    },

    /// An include directive re-entered a file that is already being expanded
    IncludeCycle {
        /// Inclusion stack, outermost first, ending with the repeated file
        chain: Vec<PathBuf>,
    },

    /// An `#include` directive without a closed, double-quoted path
    MalformedInclude {
        /// File containing the directive (empty for in-memory sources)
        file: PathBuf,
        /// 1-based line number of the directive
        line: usize,
    },

    /// Stage compilation and/or program linking reported diagnostics
    ShaderBuildFailed(Vec<ShaderDiagnostic>),

    /// Backend-specific error (OpenGL driver, windowing)
    BackendError(String),

    /// Invalid resource (shader, program, ...)
    InvalidResource(String),

    /// Initialization failed (window, GL context, function loading)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileReadFailure { path, reason } => {
                write!(f, "Failed to read file '{}': {}", path.display(), reason)
            }
            Error::IncludeCycle { chain } => {
                let chain: Vec<String> = chain.iter().map(|p| p.display().to_string()).collect();
                write!(f, "Include cycle detected: {}", chain.join(" -> "))
            }
            Error::MalformedInclude { file, line } => {
                write!(f, "Malformed include directive at {}:{}", file.display(), line)
            }
            Error::ShaderBuildFailed(diagnostics) => {
                write!(f, "Shader build failed with {} diagnostic(s)", diagnostics.len())?;
                for diagnostic in diagnostics {
                    write!(f, "\n{}", diagnostic)?;
                }
                Ok(())
            }
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Diagnostics carried by a failed program build, empty for other errors.
    pub fn diagnostics(&self) -> &[ShaderDiagnostic] {
        match self {
            Error::ShaderBuildFailed(diagnostics) => diagnostics,
            _ => &[],
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
