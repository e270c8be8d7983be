//! Logging setup for the `livedocs` binary.
//!
//! Verbosity flags raise the level of the `livedocs` crates only; axum,
//! hyper and comrak stay at `warn` until `-vvvv`. Every documentation
//! request runs inside a `request{path=...}` span, which the human format
//! prints in front of each event so interleaved requests stay readable.

use std::io::IsTerminal;

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

use crate::cli::args::ColorChoice;

/// Environment variable holding a filter directive that replaces the
/// verbosity flags.
pub const LOG_LEVEL_ENV: &str = "LIVEDOCS_LOG_LEVEL";

/// Crates whose level follows `-v`.
const LIVEDOCS_TARGETS: [&str; 3] = ["livedocs", "livedocs_core", "livedocs_render"];

/// How log lines are written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// One compact line per event, prefixed by the request span.
    #[default]
    Human,
    /// Newline-delimited JSON, with the request span as a field.
    Json,
}

/// Filter directive for `-v` repeated `verbosity` times.
///
/// `0` is `warn` everywhere. `1..=3` set the `livedocs` crates to
/// `info`, `debug` or `trace`. `4` and above trace everything.
#[must_use]
pub fn default_directive(verbosity: u8) -> String {
    let level = match verbosity {
        0 => return "warn".to_string(),
        1 => "info",
        2 => "debug",
        3 => "trace",
        _ => return "trace".to_string(),
    };
    let scoped: Vec<String> = LIVEDOCS_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect();
    format!("warn,{}", scoped.join(","))
}

/// Whether to color output for `color`, given what stderr is and whether
/// `NO_COLOR` is set.
#[must_use]
pub const fn ansi_enabled(color: ColorChoice, stderr_is_terminal: bool, no_color: bool) -> bool {
    match color {
        ColorChoice::Auto => stderr_is_terminal && !no_color,
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    }
}

/// Installs the global subscriber.
///
/// `LIVEDOCS_LOG_LEVEL`, when set and valid, replaces the directive built
/// from `verbosity`. A second call leaves the first subscriber in place.
pub fn init_logging(format: LogFormat, verbosity: u8, color: ColorChoice) {
    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    // Targets only matter once dependencies are logging too.
    let show_target = verbosity >= 4;

    match format {
        LogFormat::Human => {
            let ansi = ansi_enabled(
                color,
                std::io::stderr().is_terminal(),
                std::env::var_os("NO_COLOR").is_some(),
            );
            let _ = tracing_subscriber::fmt()
                .compact()
                .with_env_filter(filter)
                .with_ansi(ansi)
                .with_target(show_target)
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogFormat::Json => {
            let _ = tracing_subscriber::fmt()
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .with_env_filter(filter)
                .with_target(show_target)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
}
