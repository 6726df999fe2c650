//! Fuzzes the 29-byte header parser and the layout lookup.
//!
//! Run with:
//!   cargo fuzz run fuzz_f1_header

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(header) = f1_telemetry::parse_header(data) {
        let _ = header.secondary_player();
        let _ = f1_telemetry::lookup(&header);
    }
});
