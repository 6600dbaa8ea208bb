#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use mapdocs::docgen::title_from_path;

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = std::str::from_utf8(data) {
        let title = title_from_path(Path::new(name), "dd2vtt");
        assert!(!title.contains('-'));
    }
});
