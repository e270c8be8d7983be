//! Single-page rendering
//!
//! Renders one document page to stdout through the same path the server
//! uses, without starting a listener.

use std::io::Write;
use std::sync::Arc;

use livedocs_core::{RelativeDocPath, StartupOptions};
use tokio::io::AsyncReadExt;

use crate::build_info;
use crate::cli::args::RenderArgs;
use crate::config::resolve_root;
use crate::error::{LiveDocsError, RenderError};
use crate::project::{DirectoryStore, MarkdownProject, MemoryStore};
use crate::server::{DocsState, render_document};

/// Render a document page to stdout.
///
/// # Errors
///
/// Returns a config error if the root is not a directory,
/// [`LiveDocsError::DocumentNotFound`] if the path does not resolve,
/// [`LiveDocsError::Usage`] if `--stdin` is given an invalid document path,
/// [`RenderError::Read`] if the document cannot be read, or an I/O error
/// writing the page.
pub async fn run(args: &RenderArgs) -> Result<(), LiveDocsError> {
    let (project, root) = if args.stdin {
        let path = RelativeDocPath::parse(&args.path)
            .map_err(|e| LiveDocsError::Usage(e.to_string()))?;
        let mut source = String::new();
        tokio::io::stdin().read_to_string(&mut source).await?;
        // The root only labels the page here, so it need not exist.
        let root = std::path::absolute(&args.root_directory)?;
        (
            MarkdownProject::new(MemoryStore::new().with_document(path, source)),
            root,
        )
    } else {
        let root = resolve_root(&args.root_directory)?;
        (MarkdownProject::new(DirectoryStore::new(&root)), root)
    };

    let options = StartupOptions::new(root)
        .with_preview_features(args.enable_preview_features);
    let state = DocsState::new(project, Arc::new(options), build_info::cache_buster())
        .with_default_host(&args.host_url);

    let document = state
        .project()
        .resolve(&args.path)
        .await
        .map_err(|source| RenderError::Read {
            path: args.path.clone(),
            source,
        })?
        .ok_or_else(|| LiveDocsError::DocumentNotFound(args.path.clone()))?;

    let html = render_document(&state, &document, &args.host_url).await?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(html.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
