#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing, validation and unknown-key collection must never panic
        if let Ok((config, _warnings)) =
            deploy_manager::DeployConfig::from_json(content, Path::new("fuzz.json"))
        {
            for key in config.project_keys() {
                let _ = config.project(key);
            }
        }
    }
});
