//! Configuration loader
//!
//! Resolution runs in three stages:
//! 1. Read and parse the YAML file, when one is given
//! 2. Apply command-line overrides over the file values
//! 3. Validate the result (root directory exists, bind address parses) and
//!    make the root absolute

use std::path::{Path, PathBuf};

use livedocs_core::{FileConfig, StartupOptions};
use tracing::debug;

use crate::error::ConfigError;
use crate::server::parse_bind_addr;

/// Root directory when neither the file nor the command line names one.
pub const DEFAULT_ROOT: &str = ".";

/// Listen address when neither the file nor the command line names one.
pub const DEFAULT_BIND: &str = "127.0.0.1:4242";

/// Largest configuration file accepted, in bytes.
pub const MAX_CONFIG_SIZE: u64 = 1024 * 1024;

/// Values given on the command line.
///
/// `None` and `false` mean "not given", so the file value (if any) applies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServeOverrides {
    /// `--root-directory`
    pub root_directory: Option<PathBuf>,
    /// `--bind`
    pub bind: Option<String>,
    /// `--hosted`
    pub hosted: bool,
    /// `--enable-preview-features`
    pub enable_preview_features: bool,
}

/// Fully resolved settings for `serve`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeConfig {
    /// Options shared with every request.
    pub startup: StartupOptions,
    /// Normalized `host:port` to listen on.
    pub bind: String,
}

/// Loads and resolves `serve` configuration.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    max_size: u64,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// A loader with the default size limit.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_size: MAX_CONFIG_SIZE,
        }
    }

    /// Overrides the file size limit.
    #[must_use]
    pub const fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] if the file cannot be read,
    /// [`ConfigError::InvalidValue`] if it exceeds the size limit, or
    /// [`ConfigError::ParseError`] if it is not a valid configuration.
    pub fn load_file(&self, path: &Path) -> Result<FileConfig, ConfigError> {
        let metadata = std::fs::metadata(path).map_err(|_| ConfigError::MissingFile {
            path: path.to_path_buf(),
        })?;
        if metadata.len() > self.max_size {
            return Err(ConfigError::InvalidValue {
                field: "file_size".to_string(),
                value: format!("{} bytes", metadata.len()),
                expected: format!("at most {} bytes", self.max_size),
            });
        }

        let raw = std::fs::read_to_string(path).map_err(|_| ConfigError::MissingFile {
            path: path.to_path_buf(),
        })?;
        let raw = raw.strip_prefix('\u{feff}').unwrap_or(&raw);

        debug!(config = %path.display(), "loaded configuration file");
        FileConfig::from_yaml(path, raw)
    }

    /// Resolves `serve` settings from an optional file and command-line
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be loaded, the root
    /// directory is not a directory, or the bind address is invalid.
    pub fn resolve(
        &self,
        config_path: Option<&Path>,
        overrides: &ServeOverrides,
    ) -> Result<ServeConfig, ConfigError> {
        let file = match config_path {
            Some(path) => self.load_file(path)?,
            None => FileConfig::default(),
        };
        let mut config = merge(file, overrides)?;
        config.startup.root_directory = resolve_root(&config.startup.root_directory)?;
        Ok(config)
    }
}

/// Applies `overrides` over `file`, filling defaults for anything unset.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if the bind address is invalid.
pub fn merge(file: FileConfig, overrides: &ServeOverrides) -> Result<ServeConfig, ConfigError> {
    let root_directory = overrides
        .root_directory
        .clone()
        .or(file.root_directory)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT));
    let bind = overrides
        .bind
        .as_deref()
        .or(file.bind.as_deref())
        .unwrap_or(DEFAULT_BIND);

    let startup = StartupOptions::new(root_directory)
        .with_hosted(overrides.hosted || file.hosted.unwrap_or(false))
        .with_preview_features(
            overrides.enable_preview_features || file.enable_preview_features.unwrap_or(false),
        );

    Ok(ServeConfig {
        startup,
        bind: parse_bind_addr(bind)?,
    })
}

/// Canonicalizes `root`, which must be an existing directory.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if `root` does not exist or is not
/// a directory.
pub fn resolve_root(root: &Path) -> Result<PathBuf, ConfigError> {
    let invalid = || ConfigError::InvalidValue {
        field: "root_directory".to_string(),
        value: root.display().to_string(),
        expected: "an existing directory".to_string(),
    };
    let canonical = std::fs::canonicalize(root).map_err(|_| invalid())?;
    if canonical.is_dir() {
        debug!(root = %canonical.display(), "resolved root directory");
        Ok(canonical)
    } else {
        Err(invalid())
    }
}
