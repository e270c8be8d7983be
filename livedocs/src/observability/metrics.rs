//! Metrics collection for `livedocs`.
//!
//! Prometheus-compatible counters for request outcomes and layout
//! decisions. Every label value comes from a closed set, so label
//! cardinality is bounded regardless of what paths clients request.

use std::sync::atomic::{AtomicBool, Ordering};

use livedocs_render::Layout;
use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::error::ServeError;

/// Guard to prevent double-initialization of the metrics recorder.
static METRICS_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// How a request was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// The index page was served.
    Index,
    /// A document page was served.
    Document,
    /// The path did not resolve to a document.
    NotFound,
    /// Hosted mode answered with an empty page.
    Hosted,
    /// Reading or rendering failed.
    Error,
}

impl RequestOutcome {
    /// Label value for this outcome.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Document => "document",
            Self::NotFound => "not_found",
            Self::Hosted => "hosted",
            Self::Error => "error",
        }
    }
}

/// Initializes the global metrics recorder.
///
/// When `port` is `Some`, a Prometheus HTTP listener is started on
/// `127.0.0.1:<port>`. When `None`, the recorder is installed without an
/// HTTP endpoint.
///
/// # Errors
///
/// Returns [`ServeError::Metrics`] if the recorder or HTTP listener cannot
/// be installed (e.g. port already in use).
pub fn init_metrics(port: Option<u16>) -> Result<(), ServeError> {
    if METRICS_INITIALIZED.swap(true, Ordering::SeqCst) {
        tracing::debug!("metrics already initialized, skipping");
        return Ok(());
    }
    port.map_or_else(
        || PrometheusBuilder::new().install_recorder().map(|_| ()),
        |p| {
            PrometheusBuilder::new()
                .with_http_listener(([127, 0, 0, 1], p))
                .install()
        },
    )
    .map_err(|e| ServeError::Metrics(e.to_string()))?;

    describe_metrics();
    Ok(())
}

fn describe_metrics() {
    describe_counter!(
        "livedocs_requests_total",
        "Total number of documentation requests by outcome"
    );
    describe_counter!(
        "livedocs_layout_total",
        "Document pages rendered by layout"
    );
}

/// Records a handled request.
pub fn record_request(outcome: RequestOutcome) {
    counter!("livedocs_requests_total", "outcome" => outcome.as_str()).increment(1);
}

/// Records the layout chosen for a document page.
pub fn record_layout(layout: Layout) {
    counter!("livedocs_layout_total", "layout" => layout.as_str()).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_labels() {
        assert_eq!(RequestOutcome::Index.as_str(), "index");
        assert_eq!(RequestOutcome::Document.as_str(), "document");
        assert_eq!(RequestOutcome::NotFound.as_str(), "not_found");
        assert_eq!(RequestOutcome::Hosted.as_str(), "hosted");
        assert_eq!(RequestOutcome::Error.as_str(), "error");
    }

    #[test]
    fn record_functions_do_not_panic_without_recorder() {
        record_request(RequestOutcome::Document);
        record_layout(Layout::TwoColumn);
    }

    #[test]
    fn init_metrics_is_idempotent() {
        assert!(init_metrics(None).is_ok());
        assert!(init_metrics(None).is_ok());
    }
}
