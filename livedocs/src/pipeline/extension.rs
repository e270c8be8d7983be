//! Interactive-code extension.
//!
//! Turns code regions into editor elements the client runtime picks up, and
//! optionally places each region's run controls directly under its editor.

use livedocs_core::CodeRegion;
use livedocs_render::escape::{html_attribute_encode, html_encode};
use livedocs_render::{output_panel, run_button};

/// Configuration for the interactive-code extension.
///
/// A pipeline carries at most one of these. The request handler sets both
/// fields from the page's layout decision before the body is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractiveCodeExtension {
    /// Emit a run button and output panel after every editor.
    pub inline_controls: bool,
    /// Ask the runtime for terminal-style output panels.
    pub enable_preview_features: bool,
}

impl Default for InteractiveCodeExtension {
    fn default() -> Self {
        Self {
            inline_controls: true,
            enable_preview_features: false,
        }
    }
}

impl InteractiveCodeExtension {
    /// HTML for one region.
    #[must_use]
    pub fn render_region(&self, region: &CodeRegion) -> String {
        let language = if region.language.is_empty() {
            String::new()
        } else {
            format!(r#" class="language-{}""#, html_attribute_encode(&region.language))
        };
        let mut html = format!(
            r#"<div class="editor-panel"><pre><code data-trydotnet-mode="editor" data-trydotnet-session-id="{session}" data-trydotnet-run-args="{args}"{language}>{code}</code></pre></div>"#,
            session = html_attribute_encode(&region.session),
            args = html_attribute_encode(&region.run_args),
            code = html_encode(&region.source),
        );
        html.push('\n');

        if self.inline_controls {
            html.push_str(&run_button(&region.session, &region.run_args));
            html.push('\n');
            html.push_str(&output_panel(&region.session, self.enable_preview_features));
            html.push('\n');
        }
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> CodeRegion {
        CodeRegion {
            session: "intro".to_string(),
            run_args: "--release".to_string(),
            language: "rust".to_string(),
            source: "fn main() { println!(\"<hi>\"); }\n".to_string(),
        }
    }

    #[test]
    fn test_default_is_inline_without_preview() {
        let ext = InteractiveCodeExtension::default();
        assert!(ext.inline_controls);
        assert!(!ext.enable_preview_features);
    }

    #[test]
    fn test_editor_markup() {
        let ext = InteractiveCodeExtension {
            inline_controls: false,
            enable_preview_features: false,
        };
        let html = ext.render_region(&region());
        assert!(html.starts_with(
            r#"<div class="editor-panel"><pre><code data-trydotnet-mode="editor" data-trydotnet-session-id="intro" data-trydotnet-run-args="--release" class="language-rust">"#
        ));
        assert!(html.contains("println!(&quot;&lt;hi&gt;&quot;);"));
        assert!(!html.contains("run-button"));
    }

    #[test]
    fn test_inline_controls() {
        let ext = InteractiveCodeExtension {
            inline_controls: true,
            enable_preview_features: true,
        };
        let html = ext.render_region(&region());
        assert!(html.contains(r#"<button class="run-button" data-trydotnet-mode="run" data-trydotnet-session-id="intro" data-trydotnet-run-args="--release">intro</button>"#));
        assert!(html.contains(r#"data-trydotnet-output-type="terminal""#));
    }

    #[test]
    fn test_no_language_class_when_missing() {
        let mut r = region();
        r.language.clear();
        let html = InteractiveCodeExtension::default().render_region(&r);
        assert!(!html.contains("class=\"language-"));
    }
}
