//! Unified Error Type System
//!
//! Centralized error types for the entire application.
//!
//! ## Design Principles
//!
//! - Single unified error type (AutodocError) for the entire application
//! - Structured error variants with context for better debugging
//! - Parse failures carry the offending file and the first error location,
//!   so directory runs can report them per file and keep going
//! - No panic/unwrap - all errors are recoverable

use std::path::Path;

use thiserror::Error;

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum AutodocError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    /// Source file could not be parsed. Line and column are 1-based and point
    /// at the first syntax error found.
    #[error("Parse error in {path} at {line}:{column}: {message}")]
    Parse {
        path: String,
        line: usize,
        column: usize,
        message: String,
    },

    /// An output target could not be written. Fatal for that target only;
    /// anything written before it remains valid.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid source path: {0}")]
    InvalidPath(String),
}

pub type Result<T> = std::result::Result<T, AutodocError>;

// =============================================================================
// Helper Constructors
// =============================================================================

impl AutodocError {
    /// Create a parse error for a file
    pub fn parse(
        path: impl AsRef<Path>,
        line: usize,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::Parse {
            path: path.as_ref().display().to_string(),
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a write error for an output target
    pub fn write(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an invalid-path error
    pub fn invalid_path(path: impl AsRef<Path>) -> Self {
        Self::InvalidPath(path.as_ref().display().to_string())
    }

    /// Check whether this error is a per-file parse failure that directory
    /// runs record and skip rather than abort on
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = AutodocError::parse("src/app.py", 12, 5, "unexpected indent");
        assert_eq!(
            err.to_string(),
            "Parse error in src/app.py at 12:5: unexpected indent"
        );
        assert!(err.is_parse());
    }

    #[test]
    fn test_write_error_display() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = AutodocError::write("docs/index.html", io);
        let text = err.to_string();
        assert!(text.starts_with("Failed to write docs/index.html"));
        assert!(!err.is_parse());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: AutodocError = io.into();
        assert!(matches!(err, AutodocError::Io(_)));
    }

    #[test]
    fn test_invalid_path_display() {
        let err = AutodocError::invalid_path("nope.txt");
        assert_eq!(err.to_string(), "Invalid source path: nope.txt");
    }
}
