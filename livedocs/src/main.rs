//! `livedocs` - interactive documentation server

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use clap::Parser;
use tokio::signal::unix::{SignalKind, signal};
use tokio_util::sync::CancellationToken;

use livedocs::cli::args::Cli;
use livedocs::cli::commands;
use livedocs::error::ExitCode;
use livedocs::observability::init_logging;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.log_format, cli.verbose, cli.color);
    }

    let cancel = CancellationToken::new();
    let signal_exit = Arc::new(AtomicI32::new(ExitCode::SUCCESS));

    // First signal shuts down gracefully, a second one exits immediately.
    tokio::spawn({
        let cancel = cancel.clone();
        let signal_exit = Arc::clone(&signal_exit);
        async move {
            let Ok(mut sigterm) = signal(SignalKind::terminate()) else {
                tracing::warn!("failed to register SIGTERM handler");
                if tokio::signal::ctrl_c().await.is_ok() {
                    signal_exit.store(ExitCode::INTERRUPTED, Ordering::SeqCst);
                    cancel.cancel();
                }
                return;
            };

            let code = tokio::select! {
                _ = tokio::signal::ctrl_c() => ExitCode::INTERRUPTED,
                _ = sigterm.recv() => ExitCode::TERMINATED,
            };
            signal_exit.store(code, Ordering::SeqCst);
            eprintln!("\nShutting down gracefully... (press Ctrl+C again to force)");
            cancel.cancel();

            tokio::select! {
                _ = tokio::signal::ctrl_c() => std::process::exit(ExitCode::INTERRUPTED),
                _ = sigterm.recv() => std::process::exit(ExitCode::TERMINATED),
            }
        }
    });

    let result = commands::dispatch(cli, cancel).await;

    match result {
        Ok(()) => std::process::exit(signal_exit.load(Ordering::SeqCst)),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
