//! Document listing
//!
//! Prints the documents `serve` would list on its index page, in the
//! same order.

use livedocs_core::RelativeDocPath;
use serde::Serialize;

use crate::cli::args::{ListArgs, OutputFormat};
use crate::config::resolve_root;
use crate::error::LiveDocsError;
use crate::project::{DirectoryStore, MarkdownProject};

#[derive(Serialize)]
struct Listing<'a> {
    root_directory: String,
    documents: &'a [RelativeDocPath],
}

/// List the documents under the root directory.
///
/// # Errors
///
/// Returns a config error if the root is not a directory, or an I/O error
/// if it cannot be listed.
pub async fn run(args: &ListArgs) -> Result<(), LiveDocsError> {
    let root = resolve_root(&args.root_directory)?;
    let project = MarkdownProject::new(DirectoryStore::new(&root));
    let documents = project.all_documents().await?;
    tracing::debug!(count = documents.len(), "listed documents");

    match args.format {
        OutputFormat::Human => {
            for document in &documents {
                println!("{document}");
            }
        }
        OutputFormat::Json => {
            let listing = Listing {
                root_directory: root.display().to_string(),
                documents: &documents,
            };
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
    }
    Ok(())
}
