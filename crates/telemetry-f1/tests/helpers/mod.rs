//! Datagram builder shared by the integration tests.

use f1_telemetry::{HEADER_SIZE, PacketId};

/// Little-endian datagram writer. Starts with a valid F1 23 header.
pub struct DatagramBuilder {
    buf: Vec<u8>,
}

impl DatagramBuilder {
    /// Header for `kind` with format 2023, version 1.
    pub fn for_kind(kind: PacketId) -> Self {
        Self::with_header(2023, 1, kind.raw())
    }

    pub fn with_header(format: u16, packet_version: u8, packet_id: u8) -> Self {
        let mut b = Self {
            buf: Vec::with_capacity(2048),
        };
        b.u16(format)
            .u8(23) // game year
            .u8(1) // major
            .u8(18) // minor
            .u8(packet_version)
            .u8(packet_id)
            .bytes(&0x1234_5678_9ABC_DEF0_u64.to_le_bytes())
            .f32(321.25)
            .u32(4_000)
            .u32(4_100)
            .u8(0)
            .u8(255);
        b
    }

    pub fn u8(&mut self, v: u8) -> &mut Self {
        self.buf.push(v);
        self
    }

    pub fn i8(&mut self, v: i8) -> &mut Self {
        self.buf.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn u16(&mut self, v: u16) -> &mut Self {
        self.buf.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn u32(&mut self, v: u32) -> &mut Self {
        self.buf.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn f32(&mut self, v: f32) -> &mut Self {
        self.buf.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn bytes(&mut self, v: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(v);
        self
    }

    /// Zero-fill (or cut) to `payload_len` bytes after the header.
    pub fn pad_payload_to(&mut self, payload_len: usize) -> &mut Self {
        self.buf.resize(HEADER_SIZE.saturating_add(payload_len), 0);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        self.buf.clone()
    }
}

/// A datagram of `kind` with an all-zero payload of `payload_len` bytes (or
/// `SSTA` for events, whose zero code is not valid).
pub fn zeroed_datagram(kind: PacketId, payload_len: usize) -> Vec<u8> {
    let mut b = DatagramBuilder::for_kind(kind);
    if kind == PacketId::Event {
        b.bytes(b"SSTA");
    }
    b.pad_payload_to(payload_len);
    b.build()
}
