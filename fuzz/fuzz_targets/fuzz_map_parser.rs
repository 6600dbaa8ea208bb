#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use mapdocs::docgen::{MapPage, parse_map, render_page};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Any accepted map must also render.
        if let Ok(map) = parse_map(Path::new("fuzz.dd2vtt"), content) {
            let page = MapPage::from_map(&map, "dd2vtt");
            let _ = render_page(&page);
        }
    }
});
