//! Fuzzes end-to-end F1 23 datagram decoding.
//!
//! Run with:
//!   cargo fuzz run fuzz_f1_decode

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = f1_telemetry::decode(data);
});
