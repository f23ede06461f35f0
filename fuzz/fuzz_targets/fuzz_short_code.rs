#![no_main]

use godown::core::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = godown_short_code(s);
        let _ = to_slug(&capitalize(s));
    }
});
