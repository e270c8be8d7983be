//! Startup configuration types.
//!
//! [`FileConfig`] mirrors the optional YAML file: every key is optional so
//! that command-line flags can fill or override it. [`StartupOptions`] is the
//! resolved, immutable form the server reads for its whole lifetime.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ============================================================================
// Resolved Options
// ============================================================================

/// Process-wide startup options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartupOptions {
    /// Directory whose markdown files are served.
    pub root_directory: PathBuf,
    /// Restricted deployment: every documentation route answers with an
    /// empty success response.
    pub hosted: bool,
    /// Emits preview-only markup (terminal output panels).
    pub enable_preview_features: bool,
}

impl StartupOptions {
    /// Options for serving `root_directory` with every flag off.
    #[must_use]
    pub fn new(root_directory: impl Into<PathBuf>) -> Self {
        Self {
            root_directory: root_directory.into(),
            hosted: false,
            enable_preview_features: false,
        }
    }

    /// Sets the hosted-mode flag.
    #[must_use]
    pub const fn with_hosted(mut self, hosted: bool) -> Self {
        self.hosted = hosted;
        self
    }

    /// Sets the preview-features flag.
    #[must_use]
    pub const fn with_preview_features(mut self, enabled: bool) -> Self {
        self.enable_preview_features = enabled;
        self
    }
}

// ============================================================================
// File Configuration
// ============================================================================

/// On-disk configuration file (`livedocs.yaml`).
///
/// ```yaml
/// root_directory: ./docs
/// bind: 0.0.0.0:8080
/// hosted: false
/// enable_preview_features: true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct FileConfig {
    /// Directory whose markdown files are served
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_directory: Option<PathBuf>,

    /// Listen address, `[host:]port`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind: Option<String>,

    /// Hosted mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosted: Option<bool>,

    /// Preview features
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_preview_features: Option<bool>,
}

impl FileConfig {
    /// Parses a configuration document read from `path`.
    ///
    /// An empty document yields the default (all keys unset).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseError`] for malformed YAML or unknown keys.
    pub fn from_yaml(path: &Path, source: &str) -> Result<Self, ConfigError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(source).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            line: e.location().map(|l| l.line()),
            message: e.to_string(),
        })
    }
}
