//! Markdown project discovery.
//!
//! A [`MarkdownProject`] enumerates the documents of a project, resolves
//! request paths to documents, and hands out the rendering pipeline for
//! each document.

pub mod document;
pub mod store;

use std::sync::Arc;

use livedocs_core::RelativeDocPath;
use tracing::debug;

use crate::pipeline::MarkdownPipeline;

pub use document::MarkdownDocument;
pub use store::{DirectoryStore, DocumentStore, MemoryStore};

/// The documents of a project and how to render them.
#[derive(Clone)]
pub struct MarkdownProject {
    store: Arc<dyn DocumentStore>,
    interactive_code: bool,
}

impl std::fmt::Debug for MarkdownProject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkdownProject")
            .field("interactive_code", &self.interactive_code)
            .finish_non_exhaustive()
    }
}

impl MarkdownProject {
    /// A project over `store` whose pipelines render interactive code.
    pub fn new(store: impl DocumentStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
            interactive_code: true,
        }
    }

    /// Builds pipelines without the interactive-code extension.
    #[must_use]
    pub const fn without_interactive_code(mut self) -> Self {
        self.interactive_code = false;
        self
    }

    /// Every document in the project, in discovery order.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the store cannot be listed.
    pub async fn all_documents(&self) -> std::io::Result<Vec<RelativeDocPath>> {
        self.store.list().await
    }

    /// Resolves a raw request path to a document.
    ///
    /// Paths that cannot name a document resolve to `None`, the same as
    /// paths that name a missing one.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the document exists but cannot be read.
    pub async fn resolve(&self, raw: &str) -> std::io::Result<Option<MarkdownDocument>> {
        let path = match RelativeDocPath::parse(raw) {
            Ok(path) => path,
            Err(e) => {
                debug!(path = raw, error = %e, "unresolvable document path");
                return Ok(None);
            }
        };
        let source = self.store.read(&path).await?;
        Ok(source.map(|source| MarkdownDocument::new(path, source)))
    }

    /// A fresh pipeline for rendering one of the project's documents.
    ///
    /// Each call returns an independent pipeline; configuring it affects
    /// only the render it is passed to.
    #[must_use]
    pub fn new_pipeline(&self) -> MarkdownPipeline {
        if self.interactive_code {
            MarkdownPipeline::new()
        } else {
            MarkdownPipeline::plain()
        }
    }
}
