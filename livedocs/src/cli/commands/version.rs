//! Version information display
//!
//! Prints version and build metadata in human or JSON format. The asset
//! cache-buster is included since it is what browsers see in page URLs.

use serde::Serialize;

use crate::build_info;
use crate::cli::args::{OutputFormat, VersionArgs};
use crate::error::LiveDocsError;

#[derive(Serialize)]
struct VersionInfo {
    name: &'static str,
    version: &'static str,
    commit: Option<&'static str>,
    cache_buster: String,
    built_at: &'static str,
    rustc: &'static str,
}

/// Print version and build information.
///
/// # Errors
///
/// Returns [`LiveDocsError::Json`] if JSON output cannot be serialized.
pub fn run(args: &VersionArgs) -> Result<(), LiveDocsError> {
    let name = env!("CARGO_PKG_NAME");
    let cache_buster = build_info::cache_buster_string();

    match args.format {
        OutputFormat::Human => {
            println!("{name} {}", build_info::VERSION);
            println!("commit:       {}", build_info::GIT_COMMIT.unwrap_or("unknown"));
            println!("cache-buster: {cache_buster}");
            println!("built:        {}", build_info::BUILT_AT);
            println!("rustc:        {}", build_info::RUSTC_VERSION);
        }
        OutputFormat::Json => {
            let info = VersionInfo {
                name,
                version: build_info::VERSION,
                commit: build_info::GIT_COMMIT,
                cache_buster,
                built_at: build_info::BUILT_AT,
                rustc: build_info::RUSTC_VERSION,
            };
            println!("{}", serde_json::to_string(&info)?);
        }
    }
    Ok(())
}
