//! A resolved markdown document.

use std::sync::Arc;

use livedocs_core::{CodeRegion, RelativeDocPath};
use tokio::sync::OnceCell;

use crate::error::RenderError;
use crate::pipeline::{MarkdownPipeline, extract_code_regions};

/// A document whose source has been read.
///
/// Code regions are extracted on first use and cached for the lifetime of
/// this value.
#[derive(Debug)]
pub struct MarkdownDocument {
    path: RelativeDocPath,
    source: Arc<str>,
    regions: OnceCell<Vec<CodeRegion>>,
}

impl MarkdownDocument {
    /// Wraps a document's source.
    #[must_use]
    pub fn new(path: RelativeDocPath, source: impl Into<Arc<str>>) -> Self {
        Self {
            path,
            source: source.into(),
            regions: OnceCell::new(),
        }
    }

    /// The document's path.
    #[must_use]
    pub const fn path(&self) -> &RelativeDocPath {
        &self.path
    }

    /// The markdown source.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Code regions in document order.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::TaskFailed`] if the parsing task panics.
    pub async fn code_regions(&self) -> Result<&[CodeRegion], RenderError> {
        let regions = self
            .regions
            .get_or_try_init(|| {
                let source = Arc::clone(&self.source);
                async move {
                    tokio::task::spawn_blocking(move || extract_code_regions(&source))
                        .await
                        .map_err(|e| RenderError::TaskFailed {
                            path: self.path.to_string(),
                            message: e.to_string(),
                        })
                }
            })
            .await?;
        Ok(regions)
    }

    /// Renders the body with `pipeline`.
    ///
    /// The pipeline is moved into the rendering task, so whatever
    /// configuration it carries when this is called is the configuration
    /// that renders.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::TaskFailed`] if the rendering task panics.
    pub async fn render_body(&self, pipeline: MarkdownPipeline) -> Result<String, RenderError> {
        let source = Arc::clone(&self.source);
        tokio::task::spawn_blocking(move || pipeline.render_html(&source))
            .await
            .map_err(|e| RenderError::TaskFailed {
                path: self.path.to_string(),
                message: e.to_string(),
            })
    }
}
