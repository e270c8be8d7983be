//! Shared integration-test helpers for running the `livedocs` binary.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, Command};

/// Path to a file under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// The sample documentation root.
pub fn docs_root() -> PathBuf {
    fixture_path("docs")
}

/// Runs the binary to completion with `args`.
#[allow(clippy::missing_panics_doc)]
pub fn run_livedocs(args: &[&str]) -> Output {
    std::process::Command::new(env!("CARGO_BIN_EXE_livedocs"))
        .args(args)
        .env_remove("LIVEDOCS_ROOT")
        .env_remove("LIVEDOCS_CONFIG")
        .env_remove("LIVEDOCS_LOG_LEVEL")
        .stdin(Stdio::null())
        .output()
        .expect("failed to run livedocs")
}

/// Runs the binary to completion with `args` from working directory `dir`.
#[allow(clippy::missing_panics_doc)]
pub fn run_livedocs_in(dir: &Path, args: &[&str]) -> Output {
    std::process::Command::new(env!("CARGO_BIN_EXE_livedocs"))
        .args(args)
        .current_dir(dir)
        .env_remove("LIVEDOCS_ROOT")
        .env_remove("LIVEDOCS_CONFIG")
        .env_remove("LIVEDOCS_LOG_LEVEL")
        .stdin(Stdio::null())
        .output()
        .expect("failed to run livedocs")
}

/// A `livedocs serve` process listening on an ephemeral port.
///
/// The child process is killed on drop via `kill_on_drop(true)`.
pub struct LiveDocsServer {
    child: Child,
    base_url: String,
}

impl LiveDocsServer {
    /// Spawns `livedocs serve` with `extra` arguments appended.
    ///
    /// Reads stderr until the "HTTP server listening" line to discover the
    /// port.
    #[allow(clippy::missing_panics_doc)]
    pub async fn start(extra: &[&str]) -> Self {
        let root = docs_root();
        let mut args = vec![
            "serve",
            "--root-directory",
            root.to_str().expect("non-UTF-8 fixture path"),
            "--bind",
            "127.0.0.1:0",
            "-v",
            "--color",
            "never",
        ];
        args.extend_from_slice(extra);

        let mut child = Command::new(env!("CARGO_BIN_EXE_livedocs"))
            .args(&args)
            .env_remove("LIVEDOCS_LOG_LEVEL")
            .env_remove("LIVEDOCS_CONFIG")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .expect("failed to spawn livedocs");

        let stderr = child.stderr.take().expect("stderr not captured");
        let mut reader = BufReader::new(stderr);
        let mut line = String::new();
        let mut port: Option<u16> = None;

        let deadline = tokio::time::Instant::now() + Duration::from_secs(10);
        while tokio::time::Instant::now() < deadline {
            line.clear();
            let read = tokio::time::timeout(Duration::from_secs(5), reader.read_line(&mut line))
                .await
                .expect("timed out waiting for server startup")
                .expect("failed to read stderr");
            assert!(read > 0, "server exited before printing listening address");

            // e.g. "bound_addr=127.0.0.1:12345"
            if line.contains("HTTP") && line.contains("listening") {
                if let Some(start) = line.find("127.0.0.1:") {
                    let port_str: String = line[start + "127.0.0.1:".len()..]
                        .chars()
                        .take_while(char::is_ascii_digit)
                        .collect();
                    port = port_str.parse().ok();
                }
                break;
            }
        }

        let port = port.expect("failed to discover server port from stderr");

        // Keep draining stderr so the child never blocks on a full pipe.
        tokio::spawn(async move {
            let mut sink = String::new();
            while reader.read_line(&mut sink).await.is_ok_and(|n| n > 0) {
                sink.clear();
            }
        });

        Self {
            child,
            base_url: format!("http://127.0.0.1:{port}"),
        }
    }

    /// Absolute URL for `path`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Stops the server.
    pub async fn shutdown(mut self) {
        let _ = self.child.kill().await;
    }
}
