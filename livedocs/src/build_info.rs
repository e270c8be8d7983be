//! Build metadata generated at compile time by `built`.

use livedocs_render::CacheBuster;

#[allow(dead_code, clippy::doc_markdown, clippy::needless_raw_string_hashes)]
mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

/// Package version.
pub const VERSION: &str = built_info::PKG_VERSION;

/// Short git commit hash, when built from a checkout.
pub const GIT_COMMIT: Option<&str> = built_info::GIT_COMMIT_HASH_SHORT;

/// Build timestamp (RFC 2822).
pub const BUILT_AT: &str = built_info::BUILT_TIME_UTC;

/// Rust compiler used for this build.
pub const RUSTC_VERSION: &str = built_info::RUSTC_VERSION;

/// Asset version for this binary: the package version, suffixed with the
/// short commit hash when one is known.
#[must_use]
pub fn cache_buster_string() -> String {
    GIT_COMMIT.map_or_else(|| VERSION.to_string(), |hash| format!("{VERSION}-{hash}"))
}

/// The process-wide [`CacheBuster`].
#[must_use]
pub fn cache_buster() -> CacheBuster {
    CacheBuster::new(cache_buster_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_buster_starts_with_version() {
        let buster = cache_buster();
        assert!(buster.as_str().starts_with(env!("CARGO_PKG_VERSION")));
        assert_eq!(buster.as_str(), cache_buster_string());
    }

    #[test]
    fn cache_buster_is_stable() {
        assert_eq!(cache_buster(), cache_buster());
    }
}
