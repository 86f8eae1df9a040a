#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = std::str::from_utf8(data) {
        if let Ok(action) = name.parse::<deploy_manager::Action>() {
            assert_eq!(action.as_str(), name);
        }
    }
});
