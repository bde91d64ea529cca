#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — errors are fine, panics are bugs.
        if let Ok(d) = buchung::core::parse_display_date(s) {
            assert_eq!(buchung::core::format_display_date(d), s.trim());
        }
    }
});
