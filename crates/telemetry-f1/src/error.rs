//! Decode error types.
//!
//! Every decode step surfaces exactly one of these; no step substitutes a
//! default record for a failure.

use thiserror::Error;

use crate::header::PacketId;

/// Reason a datagram could not be decoded into a [`Packet`](crate::Packet).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The datagram is shorter than the fixed packet header.
    #[error("datagram too short for header: {actual} bytes (need {required})")]
    TruncatedHeader {
        /// Bytes received.
        actual: usize,
        /// Fixed header length.
        required: usize,
    },

    /// The header's `packetFormat` is not the season this build supports.
    #[error("unsupported packet format {format} (expected {expected})")]
    UnsupportedFormat {
        /// Format found in the header.
        format: u16,
        /// The only supported format.
        expected: u16,
    },

    /// The header's `packetId` is outside the closed set of known kinds.
    #[error("unknown packet id {packet_id}")]
    UnknownPacketId {
        /// Raw id found in the header.
        packet_id: u8,
    },

    /// The packet kind is known but has no layout for this `packetVersion`.
    #[error("no layout for {kind} packet version {version}")]
    UnsupportedPacketVersion {
        /// Packet kind from the header.
        kind: PacketId,
        /// Raw `packetVersion` from the header.
        version: u8,
    },

    /// The payload length disagrees with the schema for its kind and version.
    #[error("{kind} payload is {actual} bytes (expected exactly {expected})")]
    SizeMismatch {
        /// Packet kind being decoded.
        kind: PacketId,
        /// Schema payload length.
        expected: usize,
        /// Payload length received.
        actual: usize,
    },

    /// The Event packet carries a 4-byte code outside the known set.
    #[error("unknown event code {:?}", String::from_utf8_lossy(.code))]
    UnknownEventCode {
        /// The raw code bytes.
        code: [u8; 4],
    },

    /// A field read ran past the end of the buffer.
    ///
    /// Decoders validate payload length before reading, so this only
    /// appears when a buffer is read outside the registry's size checks.
    #[error("read of {needed} bytes at offset {offset} overruns {len}-byte buffer")]
    Overrun {
        /// Cursor position at the failed read.
        offset: usize,
        /// Bytes the read required.
        needed: usize,
        /// Total buffer length.
        len: usize,
    },
}

impl DecodeError {
    /// Returns `true` when the datagram's framing (header, format, id,
    /// version, length) is wrong. An unknown event code arrives in a
    /// correctly framed datagram, so it is not a framing error.
    pub fn is_framing_error(&self) -> bool {
        !matches!(self, DecodeError::UnknownEventCode { .. })
    }
}

/// Fails with [`DecodeError::SizeMismatch`] unless `payload` is exactly
/// `expected` bytes long.
pub(crate) fn expect_len(kind: PacketId, payload: &[u8], expected: usize) -> Result<(), DecodeError> {
    if payload.len() == expected {
        Ok(())
    } else {
        Err(DecodeError::SizeMismatch {
            kind,
            expected,
            actual: payload.len(),
        })
    }
}
