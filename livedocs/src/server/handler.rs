//! Document request handling.
//!
//! [`show_markdown_file`] answers one request: hosted-mode short circuit,
//! index page, or a document page whose layout is decided once from the
//! document's sessions and then drives both the pipeline configuration and
//! the scaffold.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use livedocs_core::RelativeDocPath;
use livedocs_render::{Layout, assemble_document_page, group_sessions, index_page};
use tracing::{debug, error};

use super::DocsState;
use crate::error::RenderError;
use crate::observability::metrics::{RequestOutcome, record_layout, record_request};
use crate::pipeline::MarkdownPipeline;
use crate::project::MarkdownDocument;

/// Result of handling a documentation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocsResponse {
    /// 200 with an empty body (hosted mode).
    Empty,
    /// 200 with an HTML page.
    Html(String),
    /// 404 with an empty body.
    NotFound,
    /// 500 with an empty body.
    Failed,
}

impl DocsResponse {
    /// HTTP status this response is sent with.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Empty | Self::Html(_) => StatusCode::OK,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Failed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DocsResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Html(body) => Html(body).into_response(),
            other => other.status().into_response(),
        }
    }
}

/// Answers a request for `path` made on `host_url`.
///
/// An empty `path` is the index page. Anything else is resolved as a
/// document path; paths that do not resolve answer 404.
pub async fn show_markdown_file(state: &DocsState, path: &str, host_url: &str) -> DocsResponse {
    if state.options().hosted {
        record_request(RequestOutcome::Hosted);
        return DocsResponse::Empty;
    }

    if path.is_empty() {
        return index(state).await;
    }

    let document = match state.project().resolve(path).await {
        Ok(Some(document)) => document,
        Ok(None) => {
            debug!(path, "document not found");
            record_request(RequestOutcome::NotFound);
            return DocsResponse::NotFound;
        }
        Err(e) => {
            error!(path, error = %e, "failed to read document");
            record_request(RequestOutcome::Error);
            return DocsResponse::Failed;
        }
    };

    match render_document(state, &document, host_url).await {
        Ok(html) => {
            record_request(RequestOutcome::Document);
            DocsResponse::Html(html)
        }
        Err(e) => {
            error!(path, error = %e, "failed to render document");
            record_request(RequestOutcome::Error);
            DocsResponse::Failed
        }
    }
}

async fn index(state: &DocsState) -> DocsResponse {
    match state.project().all_documents().await {
        Ok(documents) => {
            debug!(documents = documents.len(), "rendering index");
            record_request(RequestOutcome::Index);
            DocsResponse::Html(index_page(
                state.cache_buster(),
                state.root_display(),
                documents.iter().map(RelativeDocPath::as_str),
            ))
        }
        Err(e) => {
            error!(error = %e, "failed to list documents");
            record_request(RequestOutcome::Error);
            DocsResponse::Failed
        }
    }
}

/// Renders the full page for `document`.
///
/// The layout is selected once from the document's sessions. The
/// pipeline built for this call is configured from that layout before the
/// body is rendered, and the same layout picks the scaffold.
///
/// # Errors
///
/// Returns [`RenderError::TaskFailed`] if region extraction or rendering
/// fails.
pub async fn render_document(
    state: &DocsState,
    document: &MarkdownDocument,
    host_url: &str,
) -> Result<String, RenderError> {
    let regions = document.code_regions().await?;
    let groups = group_sessions(regions);
    let layout = Layout::select(&groups);

    let mut pipeline = state.project().new_pipeline();
    configure_pipeline(&mut pipeline, layout, state.options().enable_preview_features);
    let content = document.render_body(pipeline).await?;

    debug!(
        path = %document.path(),
        %layout,
        sessions = groups.len(),
        regions = regions.len(),
        "rendered document"
    );
    record_layout(layout);

    let ctx = state.render_context(host_url);
    Ok(assemble_document_page(
        &ctx,
        document.path().as_str(),
        layout,
        &groups,
        &content,
    ))
}

/// Applies the layout decision to the pipeline's interactive-code
/// extension. A pipeline without the extension is left as is.
pub fn configure_pipeline(
    pipeline: &mut MarkdownPipeline,
    layout: Layout,
    enable_preview_features: bool,
) {
    if let Some(extension) = pipeline.interactive_code_mut() {
        extension.inline_controls = layout.inline_controls();
        extension.enable_preview_features = enable_preview_features;
    }
}
