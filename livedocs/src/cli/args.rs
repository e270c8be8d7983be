//! CLI argument definitions
//!
//! All Clap derive structs for `livedocs` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::observability::LogFormat;
use crate::server::DEFAULT_HOST_URL;

// ============================================================================
// Root CLI
// ============================================================================

/// Serve markdown projects as interactive documentation.
#[derive(Parser, Debug)]
#[command(name = "livedocs", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "LIVEDOCS_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human", global = true, env = "LIVEDOCS_LOG_FORMAT")]
    pub log_format: LogFormat,
}

// ============================================================================
// Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve a directory of markdown files over HTTP.
    Serve(ServeArgs),

    /// List the documents a root directory serves.
    List(ListArgs),

    /// Render one document page to stdout.
    Render(RenderArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version and build information.
    Version(VersionArgs),
}

/// Arguments for `serve`.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Directory whose markdown files are served [default: .]
    #[arg(long, env = "LIVEDOCS_ROOT")]
    pub root_directory: Option<PathBuf>,

    /// Listen on `[host:]port` [default: 127.0.0.1:4242]
    #[arg(long, env = "LIVEDOCS_BIND")]
    pub bind: Option<String>,

    /// Hosted mode: answer every documentation route with an empty page.
    #[arg(long, env = "LIVEDOCS_HOSTED")]
    pub hosted: bool,

    /// Emit preview-only markup such as terminal output panels.
    #[arg(long, env = "LIVEDOCS_PREVIEW")]
    pub enable_preview_features: bool,

    /// Path to YAML configuration file.
    #[arg(short, long, env = "LIVEDOCS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Expose Prometheus metrics on this port.
    #[arg(long, env = "LIVEDOCS_METRICS_PORT")]
    pub metrics_port: Option<u16>,
}

/// Arguments for `list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Directory to search for markdown files.
    #[arg(long, default_value = ".", env = "LIVEDOCS_ROOT")]
    pub root_directory: PathBuf,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Document path relative to the root directory.
    pub path: String,

    /// Directory the document is resolved against.
    #[arg(long, default_value = ".", env = "LIVEDOCS_ROOT")]
    pub root_directory: PathBuf,

    /// Host URL the page's runtime connects to.
    #[arg(long, default_value = DEFAULT_HOST_URL)]
    pub host_url: String,

    /// Emit preview-only markup such as terminal output panels.
    #[arg(long, env = "LIVEDOCS_PREVIEW")]
    pub enable_preview_features: bool,

    /// Read the document source from stdin instead of the root directory.
    #[arg(long)]
    pub stdin: bool,
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================
