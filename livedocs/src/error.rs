//! Error types for `livedocs`
//!
//! This module provides the top-level error hierarchy and its mapping to
//! process exit codes.

use thiserror::Error;

pub use livedocs_core::error::{ConfigError, PathError};

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `livedocs` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Configuration error (invalid YAML, bad root directory)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Server error (bind failed, listener error)
    pub const SERVE_ERROR: i32 = 4;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;

    /// Interrupted by SIGINT (Ctrl+C)
    pub const INTERRUPTED: i32 = 130;

    /// Terminated by SIGTERM
    pub const TERMINATED: i32 = 143;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `livedocs` operations.
#[derive(Debug, Error)]
pub enum LiveDocsError {
    /// Configuration loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// HTTP server error
    #[error(transparent)]
    Serve(#[from] ServeError),

    /// Document rendering error
    #[error(transparent)]
    Render(#[from] RenderError),

    /// A requested document does not exist
    #[error("document not found: {0}")]
    DocumentNotFound(String),

    /// Invalid command-line usage
    #[error("usage error: {0}")]
    Usage(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LiveDocsError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => ExitCode::CONFIG_ERROR,
            Self::Serve(_) => ExitCode::SERVE_ERROR,
            Self::Render(_) | Self::Json(_) => ExitCode::ERROR,
            Self::DocumentNotFound(_) | Self::Io(_) => ExitCode::IO_ERROR,
            Self::Usage(_) => ExitCode::USAGE_ERROR,
        }
    }
}

// ============================================================================
// Server Errors
// ============================================================================

/// HTTP server lifecycle errors.
#[derive(Debug, Error)]
pub enum ServeError {
    /// Failed to bind the listener
    #[error("bind failed on {addr}: {source}")]
    Bind {
        /// Address that could not be bound
        addr: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The server loop exited with an error
    #[error("server error: {0}")]
    Server(#[source] std::io::Error),

    /// Metrics exporter could not be installed
    #[error("metrics exporter failed: {0}")]
    Metrics(String),
}

// ============================================================================
// Render Errors
// ============================================================================

/// Failures while turning a resolved document into HTML.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Reading the document source failed
    #[error("failed to read {path}: {source}")]
    Read {
        /// Document path
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A blocking render task panicked or was cancelled
    #[error("render task for {path} did not complete: {message}")]
    TaskFailed {
        /// Document path
        path: String,
        /// Join error description
        message: String,
    },
}

/// Result type alias for `livedocs` operations.
pub type Result<T> = std::result::Result<T, LiveDocsError>;
