//! HTTP server for documentation pages.
//!
//! Serves the index at `GET /` and document pages at `GET /{*path}` using
//! axum. Every request renders independently from the shared, immutable
//! [`DocsState`]; nothing a request configures outlives it.

pub mod handler;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::http::header::HOST;
use axum::http::uri::Authority;
use axum::routing::get;
use livedocs_core::StartupOptions;
use livedocs_render::{CacheBuster, RenderContext};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, debug_span, info};

use crate::error::{ConfigError, ServeError};
use crate::project::MarkdownProject;

pub use handler::{DocsResponse, configure_pipeline, render_document, show_markdown_file};

/// Host URL used when a request carries no usable `Host` header.
pub const DEFAULT_HOST_URL: &str = "http://localhost:4242";

// ============================================================================
// Shared State
// ============================================================================

/// Process-wide inputs shared by every request.
#[derive(Debug)]
pub struct DocsState {
    project: MarkdownProject,
    options: Arc<StartupOptions>,
    cache_buster: CacheBuster,
    root_display: String,
    default_host: String,
}

impl DocsState {
    /// State for serving `project` under `options`.
    #[must_use]
    pub fn new(
        project: MarkdownProject,
        options: Arc<StartupOptions>,
        cache_buster: CacheBuster,
    ) -> Self {
        let root_display = options.root_directory.display().to_string();
        Self {
            project,
            options,
            cache_buster,
            root_display,
            default_host: DEFAULT_HOST_URL.to_string(),
        }
    }

    /// Overrides the host URL used when a request has no `Host` header.
    #[must_use]
    pub fn with_default_host(mut self, host_url: impl Into<String>) -> Self {
        self.default_host = host_url.into();
        self
    }

    /// The project being served.
    #[must_use]
    pub const fn project(&self) -> &MarkdownProject {
        &self.project
    }

    /// Startup options.
    #[must_use]
    pub fn options(&self) -> &StartupOptions {
        &self.options
    }

    /// Asset version.
    #[must_use]
    pub const fn cache_buster(&self) -> &CacheBuster {
        &self.cache_buster
    }

    /// The project root as displayed in page titles and headers.
    #[must_use]
    pub fn root_display(&self) -> &str {
        &self.root_display
    }

    /// Render inputs for a page requested on `host_url`.
    #[must_use]
    pub fn render_context(&self, host_url: &str) -> RenderContext {
        RenderContext {
            host_url: host_url.to_string(),
            cache_buster: self.cache_buster.clone(),
            root_directory: self.root_display.clone(),
            enable_preview_features: self.options.enable_preview_features,
        }
    }
}

// ============================================================================
// Router
// ============================================================================

/// Builds the documentation router.
pub fn build_router(state: Arc<DocsState>) -> Router {
    Router::new()
        .route("/", get(index_route))
        .route("/{*path}", get(document_route))
        .with_state(state)
}

async fn index_route(State(state): State<Arc<DocsState>>, headers: HeaderMap) -> DocsResponse {
    let host = host_url(&headers, &state.default_host);
    show_markdown_file(&state, "", &host)
        .instrument(debug_span!("request", path = "/"))
        .await
}

async fn document_route(
    State(state): State<Arc<DocsState>>,
    Path(path): Path<String>,
    headers: HeaderMap,
) -> DocsResponse {
    let host = host_url(&headers, &state.default_host);
    show_markdown_file(&state, &path, &host)
        .instrument(debug_span!("request", path = %path))
        .await
}

/// Scheme and authority the request was made on.
///
/// Uses the `Host` header, with `https` when `X-Forwarded-Proto` says so.
/// Falls back to `fallback` when the header is missing or malformed.
#[must_use]
pub fn host_url(headers: &HeaderMap, fallback: &str) -> String {
    let authority = headers
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<Authority>().ok());
    let Some(authority) = authority else {
        return fallback.to_string();
    };
    let scheme = match headers
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
    {
        Some(proto) if proto.trim().eq_ignore_ascii_case("https") => "https",
        _ => "http",
    };
    format!("{scheme}://{authority}")
}

// ============================================================================
// Listener
// ============================================================================

/// Normalizes a `[host:]port` bind address.
///
/// - `":8080"` → `"0.0.0.0:8080"`
/// - `"8080"` → `"0.0.0.0:8080"`
/// - `"127.0.0.1:4242"` → unchanged
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if the result is not a socket
/// address.
pub fn parse_bind_addr(input: &str) -> Result<String, ConfigError> {
    let addr = if input.starts_with(':') {
        format!("0.0.0.0{input}")
    } else if input.parse::<u16>().is_ok() {
        format!("0.0.0.0:{input}")
    } else {
        input.to_string()
    };
    addr.parse::<SocketAddr>()
        .map_err(|_| ConfigError::InvalidValue {
            field: "bind".to_string(),
            value: input.to_string(),
            expected: "[host:]port".to_string(),
        })?;
    Ok(addr)
}

/// Binds `bind` and serves until `cancel` fires.
///
/// # Errors
///
/// Returns [`ServeError::Bind`] if the address cannot be bound, or
/// [`ServeError::Server`] if the server loop fails.
pub async fn serve(
    bind: &str,
    state: Arc<DocsState>,
    cancel: CancellationToken,
) -> Result<(), ServeError> {
    let listener = TcpListener::bind(bind)
        .await
        .map_err(|source| ServeError::Bind {
            addr: bind.to_string(),
            source,
        })?;
    let bound_addr = listener.local_addr().map_err(ServeError::Server)?;
    info!(%bound_addr, root = state.root_display(), "HTTP server listening");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(async move { cancel.cancelled().await })
        .await
        .map_err(ServeError::Server)?;

    info!("HTTP server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::MemoryStore;
    use axum::body::Body;
    use axum::http::{HeaderValue, Request, StatusCode, header};
    use livedocs_core::RelativeDocPath;
    use tower::util::ServiceExt;

    fn state() -> Arc<DocsState> {
        let store = MemoryStore::new().with_document(
            RelativeDocPath::parse("guide/intro.md").unwrap(),
            "# Intro\n\n```cs --session a\nConsole.WriteLine(1);\n```\n",
        );
        Arc::new(DocsState::new(
            MarkdownProject::new(store),
            Arc::new(StartupOptions::new("/Docs")),
            CacheBuster::new("1.0.0"),
        ))
    }

    async fn get(state: Arc<DocsState>, uri: &str) -> axum::response::Response {
        build_router(state)
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .header(header::HOST, "docs.example:8080")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn parse_bind_addr_colon_port() {
        assert_eq!(parse_bind_addr(":8080").unwrap(), "0.0.0.0:8080");
    }

    #[test]
    fn parse_bind_addr_port_only() {
        assert_eq!(parse_bind_addr("4242").unwrap(), "0.0.0.0:4242");
    }

    #[test]
    fn parse_bind_addr_full() {
        assert_eq!(parse_bind_addr("127.0.0.1:3000").unwrap(), "127.0.0.1:3000");
    }

    #[test]
    fn parse_bind_addr_invalid() {
        let err = parse_bind_addr("not-an-address").unwrap_err();
        assert!(err.to_string().contains("bind"));
    }

    #[test]
    fn host_url_from_headers() {
        let mut headers = HeaderMap::new();
        assert_eq!(host_url(&headers, DEFAULT_HOST_URL), DEFAULT_HOST_URL);

        headers.insert(HOST, HeaderValue::from_static("docs.example:8080"));
        assert_eq!(host_url(&headers, DEFAULT_HOST_URL), "http://docs.example:8080");

        headers.insert("x-forwarded-proto", HeaderValue::from_static("HTTPS"));
        assert_eq!(host_url(&headers, DEFAULT_HOST_URL), "https://docs.example:8080");
    }

    #[test]
    fn host_url_rejects_malformed_host() {
        let mut headers = HeaderMap::new();
        headers.insert(HOST, HeaderValue::from_static("bad host/"));
        assert_eq!(host_url(&headers, "http://fallback"), "http://fallback");
    }

    #[tokio::test]
    async fn index_route_lists_documents() {
        let response = get(state(), "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
        let html = body_text(response).await;
        assert_eq!(html.matches("<li>").count(), 1);
        assert!(html.contains(r#"href="guide/intro.md""#));
    }

    #[tokio::test]
    async fn document_route_renders_page() {
        let response = get(state(), "/guide/intro.md").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("<title>livedocs - guide/intro.md</title>"));
        assert!(html.contains(r#"new URL("http://docs.example:8080")"#));
        assert!(html.contains("code-single-column"));
    }

    #[tokio::test]
    async fn document_route_decodes_percent_escapes() {
        let store = MemoryStore::new()
            .with_document(RelativeDocPath::parse("my notes.md").unwrap(), "# Notes");
        let state = Arc::new(DocsState::new(
            MarkdownProject::new(store),
            Arc::new(StartupOptions::new(".")),
            CacheBuster::new("1"),
        ));
        let response = get(state, "/my%20notes.md").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_path_is_404_with_empty_body() {
        let response = get(state(), "/guide/missing.md").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.is_empty());
    }

    #[tokio::test]
    async fn asset_paths_are_not_documents() {
        let response = get(state(), "/api/trydotnet.min.js").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn serve_stops_on_cancel() {
        let cancel = CancellationToken::new();
        let task = tokio::spawn(serve("127.0.0.1:0", state(), cancel.clone()));
        cancel.cancel();
        let result = tokio::time::timeout(std::time::Duration::from_secs(5), task)
            .await
            .unwrap()
            .unwrap();
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn serve_reports_bind_failure() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = taken.local_addr().unwrap().to_string();
        let err = serve(&addr, state(), CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ServeError::Bind { .. }));
    }
}
