//! Session run controls.
//!
//! A run button and an output panel per session. The two-column layout
//! renders them all into the control column; the single-column layout has
//! the markdown pipeline emit one pair inline after each editor.

use std::fmt::Write as _;

use crate::escape::{html_attribute_encode, html_encode};
use crate::session::SessionGroups;

/// Run button for `session`, invoking the runtime with `run_args`.
#[must_use]
pub fn run_button(session: &str, run_args: &str) -> String {
    format!(
        r#"<button class="run-button" data-trydotnet-mode="run" data-trydotnet-session-id="{id}" data-trydotnet-run-args="{args}">{label}</button>"#,
        id = html_attribute_encode(session),
        args = html_attribute_encode(run_args),
        label = html_encode(session),
    )
}

/// Output panel for `session`.
///
/// With preview features on, the panel asks the runtime for terminal-style
/// output.
#[must_use]
pub fn output_panel(session: &str, enable_preview_features: bool) -> String {
    let id = html_attribute_encode(session);
    if enable_preview_features {
        format!(
            r#"<div class="output-panel" data-trydotnet-mode="runResult" data-trydotnet-output-type="terminal" data-trydotnet-session-id="{id}"></div>"#
        )
    } else {
        format!(
            r#"<div class="output-panel" data-trydotnet-mode="runResult" data-trydotnet-session-id="{id}"></div>"#
        )
    }
}

/// Controls for every session, one element per line.
///
/// Each session's button uses the run arguments of its first region. No
/// sessions yields an empty string.
#[must_use]
pub fn render_session_controls(groups: &SessionGroups<'_>, enable_preview_features: bool) -> String {
    let mut out = String::new();
    for group in groups.iter() {
        let _ = writeln!(out, "{}", run_button(group.id(), &group.first().run_args));
        let _ = writeln!(out, "{}", output_panel(group.id(), enable_preview_features));
    }
    out
}
