#![no_main]

use libfuzzer_sys::fuzz_target;
use livedocs::pipeline::FenceOptions;

fuzz_target!(|data: &[u8]| {
    if let Ok(info) = std::str::from_utf8(data) {
        if let Some(options) = FenceOptions::parse(info) {
            let region = options.into_region(1, "");
            assert!(!region.session.is_empty());
        }
    }
});
