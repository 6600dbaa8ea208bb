#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use mapdocs::config::parse_config_str;

fuzz_target!(|data: &[u8]| {
    if let Ok(yaml) = std::str::from_utf8(data) {
        let _ = parse_config_str(yaml, Path::new("fuzz.yaml"));
    }
});
