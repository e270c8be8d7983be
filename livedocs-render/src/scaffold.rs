//! Page scaffolds.
//!
//! Wraps rendered document bodies (and the index link list) in a complete
//! HTML page: head with cache-busted assets, header, footer, and the
//! bootstrap script that hands the page to the client runtime.
//!
//! Every function here is pure. The same inputs always produce the same
//! bytes, which is what makes repeated requests for a page identical.

use std::fmt;
use std::sync::Arc;

use crate::escape::{html_attribute_encode, html_encode, js_string_encode};
use crate::layout::Layout;

/// Client runtime script.
pub const RUNTIME_SCRIPT: &str = "/api/trydotnet.min.js";

/// Layout helper script (topmost-session tracking).
pub const LAYOUT_SCRIPT: &str = "/api/trydotnet-layout.min.js";

/// Page stylesheet.
pub const STYLESHEET: &str = "/css/trydotnet.css";

// ============================================================================
// Render Context
// ============================================================================

/// Version string appended to every asset URL.
///
/// Built once at startup and shared for the process lifetime; cloning is a
/// reference-count bump.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheBuster(Arc<str>);

impl CacheBuster {
    /// Wraps a version string.
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self(Arc::from(version.into()))
    }

    /// The raw version string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `path` with the `v` query parameter attached.
    #[must_use]
    pub fn asset_url(&self, path: &str) -> String {
        format!("{path}?v={}", self.0)
    }
}

impl fmt::Display for CacheBuster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-request inputs to page rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    /// Scheme and authority the page was requested on, e.g.
    /// `http://localhost:4242`.
    pub host_url: String,
    /// Process-wide asset version.
    pub cache_buster: CacheBuster,
    /// Project root as shown in titles and the header.
    pub root_directory: String,
    /// Preview features flag from startup configuration.
    pub enable_preview_features: bool,
}

/// Rendered content for a document page, shaped by its layout.
///
/// Session controls only exist for the two-column layout, so a single-column
/// page cannot be handed any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageBody<'a> {
    /// Editors with inline controls.
    SingleColumn {
        /// Rendered markdown body.
        content: &'a str,
    },
    /// Editors beside a column of session controls.
    TwoColumn {
        /// Rendered markdown body.
        content: &'a str,
        /// Output of [`render_session_controls`](crate::render_session_controls).
        controls: &'a str,
    },
}

impl PageBody<'_> {
    /// The layout this body was rendered for.
    #[must_use]
    pub const fn layout(&self) -> Layout {
        match self {
            Self::SingleColumn { .. } => Layout::SingleColumn,
            Self::TwoColumn { .. } => Layout::TwoColumn,
        }
    }
}

// ============================================================================
// Pages
// ============================================================================

/// A complete document page.
#[must_use]
pub fn document_page(ctx: &RenderContext, document_path: &str, body: &PageBody<'_>) -> String {
    let columns = match body {
        PageBody::SingleColumn { content } => format!(
            r#"
            <div id="documentation-container" class="code-single-column">
                {content}
            </div>"#
        ),
        PageBody::TwoColumn { content, controls } => format!(
            r#"
            <div id="documentation-container" class="code-column">
                {content}
            </div>
            <div class="control-column">
                {controls}
            </div>"#
        ),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">

<head>
    <meta http-equiv="Content-Type" content="text/html;charset=utf-8">
    <script src="{runtime}"></script>
    <script src="{layout}"></script>
    <link rel="stylesheet" href="{stylesheet}">
    <title>livedocs - {title}</title>
</head>

<body>
{header}
    <div class="content">
        <div class="documentation-container columns">{columns}
        </div>
    </div>

{footer}

    <script>
        trydotnet.autoEnable(new URL("{host}"));
        trydotnetLayout.trackTopmostSession(document.getElementById("documentation-container"), function (e) {{ console.log(e); }});
    </script>
</body>

</html>
"#,
        runtime = html_attribute_encode(&ctx.cache_buster.asset_url(RUNTIME_SCRIPT)),
        layout = html_attribute_encode(&ctx.cache_buster.asset_url(LAYOUT_SCRIPT)),
        stylesheet = html_attribute_encode(&ctx.cache_buster.asset_url(STYLESHEET)),
        title = html_encode(document_path),
        header = header(&ctx.root_directory),
        footer = FOOTER,
        host = js_string_encode(&ctx.host_url),
    )
}

/// One index list entry linking to `document_path`.
#[must_use]
pub fn index_entry(document_path: &str) -> String {
    format!(
        r#"<li><a class="code-example" href="{href}"><span class="icon is-small"><i class="source-file"></i></span><span>{text}</span></a></li>"#,
        href = html_attribute_encode(document_path),
        text = html_encode(document_path),
    )
}

/// The index page listing every document, in the order given.
#[must_use]
pub fn index_page<'p>(
    cache_buster: &CacheBuster,
    root_directory: &str,
    documents: impl IntoIterator<Item = &'p str>,
) -> String {
    let links = documents
        .into_iter()
        .map(index_entry)
        .collect::<Vec<_>>()
        .join("\n            ");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">

<head>
    <meta http-equiv="Content-Type" content="text/html;charset=utf-8">
    <link rel="stylesheet" href="{stylesheet}">
    <title>livedocs - {title}</title>
</head>

<body>
{header}
    <div class="content">
        <ul class="code-example-list">
            {links}
        </ul>
    </div>

{footer}
</body>

</html>
"#,
        stylesheet = html_attribute_encode(&cache_buster.asset_url(STYLESHEET)),
        title = html_encode(root_directory),
        header = header(root_directory),
        footer = FOOTER,
    )
}

// ============================================================================
// Fixed Blocks
// ============================================================================

fn header(root_directory: &str) -> String {
    format!(
        r#"    <header class="livedocs-header">
        <div>
            <span class="livedocs-name">livedocs</span>
            <span class="project-file-path">{root}</span>
        </div>
        <a href="https://github.com/livedocs/livedocs">Powered by livedocs</a>
    </header>"#,
        root = html_encode(&root_directory.to_lowercase()),
    )
}

const FOOTER: &str = r#"    <footer class="footer">
        <div class="content has-text-centered">
            <p>
                <a href="https://github.com/livedocs/livedocs/issues">Ask a question or tell us about a bug</a>
                | <a href="https://github.com/livedocs/livedocs/blob/main/SECURITY.md">Security Policy</a>
                | <a href="https://github.com/livedocs/livedocs/blob/main/LICENSE">License</a>
            </p>
        </div>
    </footer>"#;
