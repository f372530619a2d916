#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing should never panic
        if let Ok(config) = toml::from_str::<htmlconst::Config>(content) {
            let _ = config.source_assets(std::path::Path::new(""));
        }
    }
});
