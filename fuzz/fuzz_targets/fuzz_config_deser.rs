#![no_main]

use libfuzzer_sys::fuzz_target;

use irwave_core::GeneratorConfig;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Arbitrary JSON must either fail to deserialize or produce a
        // config that validate() can judge without panicking.
        if let Ok(config) = serde_json::from_str::<GeneratorConfig>(text) {
            let _ = config.validate();
        }
    }
});
