//! Relative document paths.
//!
//! Every document is addressed by a path relative to the project root.
//! Paths are normalized once at the boundary (URL segment, directory walk,
//! CLI argument) so that lookups compare like with like.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::PathError;

/// A normalized, `/`-separated markdown path relative to the project root.
///
/// Normalization:
/// 1. `\` becomes `/`
/// 2. empty and `.` segments are dropped (this strips leading `./` and `/`)
/// 3. `..` segments, drive prefixes (`C:`), and NUL bytes are rejected
/// 4. the final segment must end in `.md` (any case)
///
/// Display preserves the original casing; equality and hashing use the
/// case-folded [`lookup_key`](Self::lookup_key).
#[derive(Debug, Clone)]
pub struct RelativeDocPath {
    value: String,
    key: String,
}

impl RelativeDocPath {
    /// Normalizes `raw` into a document path.
    ///
    /// # Errors
    ///
    /// Returns a [`PathError`] describing why `raw` cannot name a document.
    pub fn parse(raw: &str) -> Result<Self, PathError> {
        if raw.contains('\0') {
            return Err(PathError::InvalidCharacter);
        }

        let unified = raw.replace('\\', "/");
        let mut segments = Vec::new();
        for segment in unified.split('/') {
            match segment {
                "" | "." => {}
                ".." => return Err(PathError::ParentTraversal(raw.to_string())),
                s => segments.push(s),
            }
        }

        let Some(first) = segments.first() else {
            return Err(PathError::Empty);
        };
        if first.contains(':') {
            return Err(PathError::NotRelative(raw.to_string()));
        }

        let is_markdown = segments
            .last()
            .and_then(|name| name.rsplit_once('.'))
            .is_some_and(|(stem, ext)| !stem.is_empty() && ext.eq_ignore_ascii_case("md"));
        if !is_markdown {
            return Err(PathError::NotMarkdown(raw.to_string()));
        }

        let value = segments.join("/");
        let key = value.to_lowercase();
        Ok(Self { value, key })
    }

    /// The normalized path as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Case-folded form used for lookups.
    #[must_use]
    pub fn lookup_key(&self) -> &str {
        &self.key
    }

    /// The final path segment.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.value.rsplit('/').next().unwrap_or(&self.value)
    }
}

impl PartialEq for RelativeDocPath {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for RelativeDocPath {}

impl std::hash::Hash for RelativeDocPath {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for RelativeDocPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for RelativeDocPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for RelativeDocPath {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl Serialize for RelativeDocPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}
