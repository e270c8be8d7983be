//! Configuration module
//!
//! Loads the optional YAML configuration file and merges it with
//! command-line flags into the resolved settings `serve` runs with.

pub mod loader;

pub use loader::{
    ConfigLoader, DEFAULT_BIND, DEFAULT_ROOT, MAX_CONFIG_SIZE, ServeConfig, ServeOverrides,
    resolve_root,
};
