#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — errors are fine, panics are bugs.
        if let Ok(r) = s.parse::<buchung::core::ReferenceNumber>() {
            // Anything that parses must format back to the same string.
            assert_eq!(r.to_string(), s);
        }
    }
});
