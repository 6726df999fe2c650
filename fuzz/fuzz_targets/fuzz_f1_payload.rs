//! Fuzzes each packet decoder with a valid header and arbitrary payload.
//! The first input byte picks the packet kind.
//!
//! Run with:
//!   cargo fuzz run fuzz_f1_payload

#![no_main]

use f1_telemetry::{PacketHeader, layouts};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((selector, payload)) = data.split_first() else {
        return;
    };
    let table = layouts();
    let Some(layout) = table.get(usize::from(*selector) % table.len()) else {
        return;
    };
    let header = PacketHeader {
        packet_format: f1_telemetry::PACKET_FORMAT_2023,
        packet_version: layout.packet_version,
        packet_id: layout.kind.raw(),
        ..PacketHeader::default()
    };
    let _ = layout.decode(header, payload);
});
