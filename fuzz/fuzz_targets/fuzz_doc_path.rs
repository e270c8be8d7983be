#![no_main]

use libfuzzer_sys::fuzz_target;
use livedocs_core::RelativeDocPath;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        if let Ok(path) = RelativeDocPath::parse(raw) {
            // Normalized paths never climb out of the root and reparse to themselves.
            assert!(!path.as_str().split('/').any(|segment| segment == ".."));
            let again = RelativeDocPath::parse(path.as_str()).expect("normalized path reparses");
            assert_eq!(again.as_str(), path.as_str());
        }
    }
});
