//! Document storage backends.
//!
//! A [`DocumentStore`] enumerates markdown files and reads their source.
//! [`DirectoryStore`] serves a directory tree; [`MemoryStore`] holds
//! documents in memory for tests and single-document rendering.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;
use livedocs_core::RelativeDocPath;
use tracing::{debug, warn};

/// Directories never searched for documents.
const SKIPPED_DIRECTORIES: [&str; 4] = ["bin", "obj", "target", "node_modules"];

/// Source of markdown documents.
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    /// Every document, in the store's listing order.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the listing cannot be produced.
    async fn list(&self) -> std::io::Result<Vec<RelativeDocPath>>;

    /// Reads a document's source, or `None` when it does not exist.
    ///
    /// Lookups are case-insensitive on the normalized path.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the document exists but cannot be read.
    async fn read(&self, path: &RelativeDocPath) -> std::io::Result<Option<String>>;
}

// ============================================================================
// Directory Store
// ============================================================================

/// Markdown files under a root directory.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Serves documents under `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walks the root for `**/*.md`, sorted by path.
    fn scan(root: &Path) -> std::io::Result<Vec<RelativeDocPath>> {
        // Glob output is normalized, so `.` and `./` roots never prefix it.
        let root = match std::fs::canonicalize(root) {
            Ok(root) => root,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };
        let root = root.as_path();
        let escaped = glob::Pattern::escape(&root.to_string_lossy());
        let pattern = format!("{escaped}/**/*.[mM][dD]");
        let entries = glob::glob(&pattern)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

        let mut documents = Vec::new();
        for entry in entries {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            if !path.is_file() {
                continue;
            }
            let Ok(relative) = path.strip_prefix(root) else {
                continue;
            };
            if is_skipped(relative) {
                continue;
            }
            match RelativeDocPath::parse(&relative.to_string_lossy()) {
                Ok(doc) => documents.push(doc),
                Err(e) => debug!(path = %relative.display(), error = %e, "not a document path"),
            }
        }

        documents.sort_by(|a, b| {
            a.lookup_key()
                .cmp(b.lookup_key())
                .then_with(|| a.as_str().cmp(b.as_str()))
        });
        documents.dedup();
        Ok(documents)
    }
}

/// Whether any directory component is hidden or a build output folder.
fn is_skipped(relative: &Path) -> bool {
    let Some(parent) = relative.parent() else {
        return false;
    };
    parent.components().any(|c| {
        let name = c.as_os_str().to_string_lossy();
        name.starts_with('.')
            || SKIPPED_DIRECTORIES
                .iter()
                .any(|skipped| skipped.eq_ignore_ascii_case(&name))
    })
}

async fn read_if_file(path: &Path) -> std::io::Result<Option<String>> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) if metadata.is_file() => {}
        Ok(_) => return Ok(None),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    }
    match tokio::fs::read_to_string(path).await {
        Ok(source) => Ok(Some(source)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

#[async_trait::async_trait]
impl DocumentStore for DirectoryStore {
    async fn list(&self) -> std::io::Result<Vec<RelativeDocPath>> {
        let root = self.root.clone();
        tokio::task::spawn_blocking(move || Self::scan(&root))
            .await
            .map_err(std::io::Error::other)?
    }

    async fn read(&self, path: &RelativeDocPath) -> std::io::Result<Option<String>> {
        let relative = Path::new(path.as_str());
        if is_skipped(relative) {
            return Ok(None);
        }
        if let Some(source) = read_if_file(&self.root.join(relative)).await? {
            return Ok(Some(source));
        }

        // Case-sensitive filesystems miss differently cased requests.
        let listed = self.list().await?;
        let Some(found) = listed.into_iter().find(|p| p == path) else {
            return Ok(None);
        };
        debug!(requested = %path, found = %found, "resolved document through listing");
        read_if_file(&self.root.join(found.as_str())).await
    }
}

// ============================================================================
// Memory Store
// ============================================================================

/// Documents held in memory, listed in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: Arc<IndexMap<RelativeDocPath, String>>,
}

impl MemoryStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a document, replacing any existing one at the same path.
    #[must_use]
    pub fn with_document(mut self, path: RelativeDocPath, source: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.documents).insert(path, source.into());
        self
    }
}

#[async_trait::async_trait]
impl DocumentStore for MemoryStore {
    async fn list(&self) -> std::io::Result<Vec<RelativeDocPath>> {
        Ok(self.documents.keys().cloned().collect())
    }

    async fn read(&self, path: &RelativeDocPath) -> std::io::Result<Option<String>> {
        Ok(self.documents.get(path).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(path: &str) -> RelativeDocPath {
        RelativeDocPath::parse(path).unwrap()
    }

    fn write(root: &Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    #[tokio::test]
    async fn test_directory_listing_is_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "readme.md", "# Readme");
        write(dir.path(), "docs/b.md", "b");
        write(dir.path(), "docs/a.MD", "a");
        write(dir.path(), "docs/notes.txt", "not markdown");
        write(dir.path(), ".git/info.md", "hidden");
        write(dir.path(), "target/doc.md", "build output");
        write(dir.path(), "node_modules/pkg/README.md", "vendored");

        let store = DirectoryStore::new(dir.path());
        let listed: Vec<String> = store
            .list()
            .await
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(listed, ["docs/a.MD", "docs/b.md", "readme.md"]);
    }

    #[tokio::test]
    async fn test_directory_read_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "Docs/Intro.md", "# Intro");

        let store = DirectoryStore::new(dir.path());
        assert_eq!(
            store.read(&doc("docs/intro.md")).await.unwrap().as_deref(),
            Some("# Intro")
        );
        assert_eq!(store.read(&doc("docs/missing.md")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_directory_read_skips_hidden() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), ".secret/keys.md", "nope");
        let store = DirectoryStore::new(dir.path());
        assert_eq!(store.read(&doc(".secret/keys.md")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_relative_root_with_dot_segments() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "docs/a.md", "a");
        write(dir.path(), "b.md", "b");

        let store = DirectoryStore::new(dir.path().join("docs/./.."));
        let listed: Vec<String> = store
            .list()
            .await
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(listed, ["b.md", "docs/a.md"]);
        assert_eq!(store.read(&doc("./docs/a.md")).await.unwrap().as_deref(), Some("a"));
    }

    #[tokio::test]
    async fn test_directory_read_skips_build_output() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "target/doc.md", "build output");
        let store = DirectoryStore::new(dir.path());
        assert_eq!(store.read(&doc("target/doc.md")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_missing_root_lists_nothing() {
        let store = DirectoryStore::new("/definitely/not/a/livedocs/root");
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_memory_store_insertion_order() {
        let store = MemoryStore::new()
            .with_document(doc("z.md"), "z")
            .with_document(doc("a.md"), "a");
        let listed: Vec<String> = store
            .list()
            .await
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(listed, ["z.md", "a.md"]);
        assert_eq!(store.read(&doc("A.md")).await.unwrap().as_deref(), Some("a"));
    }

    #[test]
    fn test_is_skipped() {
        assert!(is_skipped(Path::new(".github/a.md")));
        assert!(is_skipped(Path::new("src/bin/a.md")));
        assert!(is_skipped(Path::new("Target/a.md")));
        assert!(!is_skipped(Path::new("docs/a.md")));
        assert!(!is_skipped(Path::new(".hidden.md")));
    }
}
