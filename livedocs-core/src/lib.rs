//! `livedocs` Core - shared types for serving interactive documentation
//!
//! This crate provides the document path, code region, startup
//! configuration, and error types shared across `livedocs` (CLI/server)
//! and `livedocs-render` (page assembly).

pub mod config;
pub mod error;
pub mod path;
pub mod region;

pub use config::{FileConfig, StartupOptions};
pub use error::{ConfigError, PathError};
pub use path::RelativeDocPath;
pub use region::CodeRegion;
