//! Error types for edgediff

use crate::types::EdgeParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Error types for edgediff operations
#[derive(Debug, Error)]
pub enum EdgeDiffError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A non-matching line that cannot be parsed into an edge record
    #[error("{}:{line}: malformed edge line {text:?}: {source}", .path.display())]
    MalformedLine {
        path: PathBuf,
        line: usize,
        text: String,
        source: EdgeParseError,
    },
}

impl EdgeDiffError {
    /// Check if this error is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, EdgeDiffError::Config(_))
    }

    /// Check if this error came from a malformed input line
    pub fn is_malformed_line(&self) -> bool {
        matches!(self, EdgeDiffError::MalformedLine { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_io_error_automatic_conversion() {
        let io_error = IoError::new(ErrorKind::NotFound, "file not found");
        let diff_error: EdgeDiffError = io_error.into();

        assert!(matches!(diff_error, EdgeDiffError::Io(_)));
        assert!(diff_error.to_string().contains("IO error"));
    }

    #[test]
    fn test_io_error_from_function() {
        fn returns_io_error() -> Result<(), EdgeDiffError> {
            let _file = std::fs::File::open("/nonexistent/path/file.txt")?;
            Ok(())
        }

        let result = returns_io_error();
        assert!(matches!(result, Err(EdgeDiffError::Io(_))));
    }

    #[test]
    fn test_config_error() {
        let error = EdgeDiffError::Config("Checked file does not exist".to_string());
        assert!(error.to_string().contains("Configuration error"));
        assert!(error.to_string().contains("Checked file does not exist"));
        assert!(error.is_config_error());
        assert!(!error.is_malformed_line());
    }

    #[test]
    fn test_malformed_line_names_file_and_line() {
        let error = EdgeDiffError::MalformedLine {
            path: PathBuf::from("graphs/a.txt"),
            line: 7,
            text: "1 2".to_string(),
            source: EdgeParseError::FieldCount { found: 2 },
        };

        let rendered = error.to_string();
        assert!(rendered.contains("graphs/a.txt:7"));
        assert!(rendered.contains("\"1 2\""));
        assert!(rendered.contains("found 2"));
        assert!(error.is_malformed_line());
        assert!(!error.is_config_error());
    }

    #[test]
    fn test_malformed_line_exposes_source() {
        use std::error::Error;

        let int_error = "x".parse::<i64>().expect_err("not an integer");
        let error = EdgeDiffError::MalformedLine {
            path: PathBuf::from("a.txt"),
            line: 1,
            text: "1 x 3".to_string(),
            source: EdgeParseError::InvalidInteger {
                index: 1,
                source: int_error,
            },
        };

        assert!(error.source().is_some());
    }

    #[test]
    fn test_result_propagation() {
        fn inner_function() -> Result<(), EdgeDiffError> {
            Err(EdgeDiffError::Config("test error".to_string()))
        }

        fn outer_function() -> Result<(), EdgeDiffError> {
            inner_function()?;
            Ok(())
        }

        let result = outer_function();
        assert!(matches!(result, Err(EdgeDiffError::Config(_))));
    }
}
