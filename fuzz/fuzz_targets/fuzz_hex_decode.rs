#![no_main]

use libfuzzer_sys::fuzz_target;

use irwave_core::CommandWord;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Parsing must reject bad input with an error, never a panic.
        if let Ok(word) = CommandWord::from_hex(text) {
            let _ = word.payload_bytes();
            let _ = word.is_well_formed();
        }
    }
});
