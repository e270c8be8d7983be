//! `livedocs` Render - page assembly for interactive documentation
//!
//! Groups a document's code regions into sessions, picks the page layout
//! from session density, and assembles the HTML scaffold and session
//! controls around an already-rendered markdown body.

pub mod controls;
pub mod escape;
pub mod layout;
pub mod scaffold;
pub mod session;

pub use controls::{output_panel, render_session_controls, run_button};
pub use layout::Layout;
pub use scaffold::{CacheBuster, PageBody, RenderContext, document_page, index_page};
pub use session::{SessionGroup, SessionGroups, group_sessions};

/// Wraps a rendered body in the scaffold for `layout`.
///
/// For [`Layout::TwoColumn`] the session controls are rendered from
/// `groups`; a single-column page has none. `layout` must be the value that
/// configured the pipeline which produced `content`.
#[must_use]
pub fn assemble_document_page(
    ctx: &RenderContext,
    document_path: &str,
    layout: Layout,
    groups: &SessionGroups<'_>,
    content: &str,
) -> String {
    match layout {
        Layout::SingleColumn => {
            document_page(ctx, document_path, &PageBody::SingleColumn { content })
        }
        Layout::TwoColumn => {
            let controls = render_session_controls(groups, ctx.enable_preview_features);
            document_page(
                ctx,
                document_path,
                &PageBody::TwoColumn {
                    content,
                    controls: &controls,
                },
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use livedocs_core::CodeRegion;

    fn ctx(preview: bool) -> RenderContext {
        RenderContext {
            host_url: "http://example.test".to_string(),
            cache_buster: CacheBuster::new("0.3.0"),
            root_directory: "/docs".to_string(),
            enable_preview_features: preview,
        }
    }

    #[test]
    fn test_single_column_has_no_controls() {
        let regions = vec![CodeRegion::new("a", "run")];
        let groups = group_sessions(&regions);
        let layout = Layout::select(&groups);
        let html = assemble_document_page(&ctx(false), "a.md", layout, &groups, "<p/>");
        assert!(html.contains("code-single-column"));
        assert!(!html.contains("run-button"));
    }

    #[test]
    fn test_two_column_renders_controls_with_preview() {
        let regions = vec![
            CodeRegion::new("a", "run"),
            CodeRegion::new("a", "run2"),
            CodeRegion::new("a", "run3"),
        ];
        let groups = group_sessions(&regions);
        let layout = Layout::select(&groups);
        assert_eq!(layout, Layout::TwoColumn);

        let html = assemble_document_page(&ctx(true), "a.md", layout, &groups, "<p/>");
        assert!(html.contains(r#"<div class="control-column">"#));
        assert!(html.contains(r#"data-trydotnet-run-args="run""#));
        assert!(html.contains(r#"data-trydotnet-output-type="terminal""#));
    }
}
