#![no_main]

use libfuzzer_sys::fuzz_target;
use livedocs::pipeline::{MarkdownPipeline, extract_code_regions};

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        let regions = extract_code_regions(source);
        let html = MarkdownPipeline::new().render_html(source);
        // Every region becomes an editor; raw HTML in the source may add more.
        assert!(html.matches(r#"data-trydotnet-mode="editor""#).count() >= regions.len());
    }
});
