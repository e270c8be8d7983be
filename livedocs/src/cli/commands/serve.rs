//! `serve` command handler

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::build_info;
use crate::cli::args::ServeArgs;
use crate::config::{ConfigLoader, ServeOverrides};
use crate::error::LiveDocsError;
use crate::project::{DirectoryStore, MarkdownProject};
use crate::server::{self, DocsState};

/// Start the documentation server and run until `cancel` fires.
///
/// # Errors
///
/// Returns a config error if the configuration cannot be resolved, or a
/// serve error if the listener cannot be bound or fails.
pub async fn run(args: &ServeArgs, cancel: CancellationToken) -> Result<(), LiveDocsError> {
    if let Some(port) = args.metrics_port {
        crate::observability::init_metrics(Some(port))?;
        info!(port, "Prometheus metrics endpoint started");
    }

    let overrides = ServeOverrides {
        root_directory: args.root_directory.clone(),
        bind: args.bind.clone(),
        hosted: args.hosted,
        enable_preview_features: args.enable_preview_features,
    };
    let config = ConfigLoader::new().resolve(args.config.as_deref(), &overrides)?;
    let options = Arc::new(config.startup);

    info!(
        root = %options.root_directory.display(),
        hosted = options.hosted,
        preview = options.enable_preview_features,
        cache_buster = %build_info::cache_buster_string(),
        "starting documentation server"
    );

    let project = MarkdownProject::new(DirectoryStore::new(&options.root_directory));
    let state = Arc::new(DocsState::new(project, options, build_info::cache_buster()));
    server::serve(&config.bind, state, cancel).await?;
    Ok(())
}
