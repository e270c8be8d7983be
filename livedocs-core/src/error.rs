//! Core error types for `livedocs`
//!
//! Path normalization and configuration error types shared across the
//! workspace.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Path Errors
// ============================================================================

/// Reasons a requested document path cannot name a document.
///
/// The request handler folds every variant into a not-found response; the
/// distinction only shows up in debug logs and in the `render` command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// Path was empty after normalization
    #[error("document path is empty")]
    Empty,

    /// Path tried to climb out of the project root
    #[error("document path '{0}' escapes the project root")]
    ParentTraversal(String),

    /// Path carried a drive or scheme prefix
    #[error("document path '{0}' is not relative")]
    NotRelative(String),

    /// Path contained a NUL byte
    #[error("document path contains a NUL byte")]
    InvalidCharacter,

    /// Path does not name a markdown file
    #[error("document path '{0}' is not a markdown file")]
    NotMarkdown(String),
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing failed
    #[error("parse error in {path}{}: {message}", line.map_or_else(String::new, |l| format!(" (line {l})")))]
    ParseError {
        /// Path to the configuration file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },

    /// Referenced configuration file not found
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// Field has an invalid value
    #[error("invalid value for '{field}': got '{value}', expected {expected}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The actual value provided
        value: String,
        /// Description of what was expected
        expected: String,
    },
}
