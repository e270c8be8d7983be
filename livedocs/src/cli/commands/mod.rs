//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod completions;
pub mod list;
pub mod render;
pub mod serve;
pub mod version;

use tokio_util::sync::CancellationToken;

use crate::cli::args::{Cli, Commands};
use crate::error::LiveDocsError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// `cancel` stops long-running commands (`serve`) gracefully.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub async fn dispatch(cli: Cli, cancel: CancellationToken) -> Result<(), LiveDocsError> {
    match cli.command {
        Commands::Serve(args) => serve::run(&args, cancel).await,
        Commands::List(args) => list::run(&args).await,
        Commands::Render(args) => render::run(&args).await,
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => version::run(&args),
    }
}
