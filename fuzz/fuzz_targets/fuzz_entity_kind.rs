#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Fuzz enumeration parsing - unknown text must be an error, never a panic
        let _ = s.parse::<jobstage::EntityKind>();
        let _ = s.parse::<jobstage::FileCategory>();
    }
});
