//! Markdown rendering pipeline.
//!
//! Parses documents with `comrak`, extracts code regions, and renders the
//! document body. The interactive-code extension is an explicit, typed part
//! of the pipeline: callers reach it through
//! [`MarkdownPipeline::interactive_code_mut`] instead of searching an
//! extension list.
//!
//! Pipelines are small `Copy` values built per request, so configuring one
//! never affects another request rendering the same document.

pub mod extension;
pub mod fence;

use comrak::nodes::{AstNode, NodeHtmlBlock, NodeValue};
use comrak::{Arena, Options};
use livedocs_core::CodeRegion;

pub use extension::InteractiveCodeExtension;
pub use fence::FenceOptions;

/// A configured markdown renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkdownPipeline {
    interactive_code: Option<InteractiveCodeExtension>,
}

impl Default for MarkdownPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownPipeline {
    /// A pipeline with the interactive-code extension registered.
    #[must_use]
    pub fn new() -> Self {
        Self {
            interactive_code: Some(InteractiveCodeExtension::default()),
        }
    }

    /// A pipeline that renders every fence as plain code.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            interactive_code: None,
        }
    }

    /// The interactive-code extension, when registered.
    #[must_use]
    pub const fn interactive_code(&self) -> Option<&InteractiveCodeExtension> {
        self.interactive_code.as_ref()
    }

    /// Mutable access to the interactive-code extension, when registered.
    pub const fn interactive_code_mut(&mut self) -> Option<&mut InteractiveCodeExtension> {
        self.interactive_code.as_mut()
    }

    /// Renders `source` to an HTML fragment.
    #[must_use]
    pub fn render_html(&self, source: &str) -> String {
        let mut options = Options::default();
        configure(&mut options);
        let arena = Arena::new();
        let root = comrak::parse_document(&arena, source, &options);

        if let Some(extension) = &self.interactive_code {
            let mut ordinal = 0;
            for node in root.descendants() {
                let Some(region) = region_at(node, &mut ordinal) else {
                    continue;
                };
                node.data.borrow_mut().value = NodeValue::HtmlBlock(NodeHtmlBlock {
                    block_type: 0,
                    literal: extension.render_region(&region),
                });
            }
        }

        let mut html = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = comrak::format_html(root, &options, &mut html);
        String::from_utf8_lossy(&html).into_owned()
    }
}

/// Code regions of `source`, in document order.
#[must_use]
pub fn extract_code_regions(source: &str) -> Vec<CodeRegion> {
    let mut options = Options::default();
    configure(&mut options);
    let arena = Arena::new();
    let root = comrak::parse_document(&arena, source, &options);

    let mut ordinal = 0;
    root.descendants()
        .filter_map(|node| region_at(node, &mut ordinal))
        .collect()
}

/// The region a node represents, numbering regions through `ordinal`.
fn region_at<'a>(node: &'a AstNode<'a>, ordinal: &mut usize) -> Option<CodeRegion> {
    let data = node.data.borrow();
    let NodeValue::CodeBlock(block) = &data.value else {
        return None;
    };
    if !block.fenced {
        return None;
    }
    let options = FenceOptions::parse(&block.info)?;
    *ordinal += 1;
    Some(options.into_region(*ordinal, &block.literal))
}

/// GFM extensions on; raw HTML in documents passes through.
fn configure(options: &mut Options) {
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.render.unsafe_ = true;
}
