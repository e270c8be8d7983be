//! Runnable code regions extracted from a document.

use serde::Serialize;

/// A fenced code block that the client runtime turns into an editor.
///
/// Regions are produced in document order; the first region of a session
/// supplies the run arguments for that session's run button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeRegion {
    /// Session identifier shared by regions that execute together.
    pub session: String,
    /// Arguments handed to the runtime when the session is run.
    pub run_args: String,
    /// Fence language (`rust`, `cs`, ...); empty when the fence had none.
    pub language: String,
    /// Source text of the block.
    pub source: String,
}

impl CodeRegion {
    /// Builds a region with no language or source, as tests and callers
    /// that only care about sessions need.
    #[must_use]
    pub fn new(session: impl Into<String>, run_args: impl Into<String>) -> Self {
        Self {
            session: session.into(),
            run_args: run_args.into(),
            language: String::new(),
            source: String::new(),
        }
    }
}
