#![no_main]

use jobstage::{build_local_path, last_segment, EntityKind, FileCategory};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(reference) = std::str::from_utf8(data) {
        // A segment is never empty and never spans a '/'
        if let Ok(segment) = last_segment(reference) {
            assert!(!segment.is_empty());
            assert!(!segment.contains('/'));
        }
        let _ = build_local_path(
            "workspace",
            "id",
            reference,
            FileCategory::Setup,
            EntityKind::Application,
        );
    }
});
