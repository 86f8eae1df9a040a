#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let content = String::from_utf8_lossy(data);
    // Marker content becomes a git argument: only plain hex may pass
    if let Some(hash) = deploy_manager::CommitHash::parse(&content) {
        assert!(hash.as_str().bytes().all(|b| b.is_ascii_hexdigit()));
    }
});
