//! Property-based fuzz tests for F1 23 datagram decoding.
//!
//! The decoder must never panic and must return either a packet or an error
//! for any input.

use f1_telemetry::{DecodeError, HEADER_SIZE, PacketId, decode, layouts, parse_header};
use proptest::prelude::*;

const F1_PACKET_MAX: usize = 2048;

/// A valid F1 23 header for `kind` followed by `payload`.
fn datagram(kind: PacketId, payload: &[u8]) -> Vec<u8> {
    let mut raw = Vec::with_capacity(HEADER_SIZE + payload.len());
    raw.extend_from_slice(&2023u16.to_le_bytes());
    raw.extend_from_slice(&[23, 1, 18, 1, kind.raw()]);
    raw.extend_from_slice(&0xABCD_u64.to_le_bytes());
    raw.extend_from_slice(&1.5f32.to_le_bytes());
    raw.extend_from_slice(&[0; 8]);
    raw.extend_from_slice(&[0, 255]);
    raw.extend_from_slice(payload);
    raw
}

/// Kinds whose payload content cannot fail once the length is right.
fn content_agnostic_kind() -> impl Strategy<Value = PacketId> {
    proptest::sample::select(
        PacketId::ALL
            .into_iter()
            .filter(|kind| *kind != PacketId::Event)
            .collect::<Vec<_>>(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Arbitrary random bytes of any length must never cause a panic.
    #[test]
    fn prop_random_bytes_no_panic(
        data in proptest::collection::vec(any::<u8>(), 0..F1_PACKET_MAX)
    ) {
        let _ = decode(&data);
    }

    /// A random header followed by random bytes never panics, and anything
    /// shorter than a header is always `TruncatedHeader`.
    #[test]
    fn prop_random_header_no_panic(
        data in proptest::collection::vec(any::<u8>(), 0..(HEADER_SIZE * 2))
    ) {
        let result = decode(&data);
        if data.len() < HEADER_SIZE {
            prop_assert!(
                matches!(result, Err(DecodeError::TruncatedHeader { .. })),
                "expected TruncatedHeader, got {:?}",
                result
            );
        } else {
            prop_assert!(parse_header(&data).is_ok());
        }
    }

    /// A valid header with a random payload of exactly the schema length
    /// always decodes to the matching kind.
    #[test]
    fn prop_exact_size_random_payload_decodes(
        kind in content_agnostic_kind(),
        seed in proptest::collection::vec(any::<u8>(), 1..64),
    ) {
        let layout = layouts()
            .iter()
            .find(|l| l.kind == kind)
            .ok_or_else(|| TestCaseError::fail("kind missing from layout table"))?;
        let payload: Vec<u8> = seed.iter().copied().cycle().take(layout.payload_size).collect();
        let packet = decode(&datagram(kind, &payload))
            .map_err(|e| TestCaseError::fail(format!("{kind}: {e}")))?;
        prop_assert_eq!(packet.packet_id(), kind);
    }

    /// Any payload length other than the schema length is a size mismatch.
    #[test]
    fn prop_wrong_payload_length_is_size_mismatch(
        kind in content_agnostic_kind(),
        len in 0usize..1600,
    ) {
        let layout = layouts()
            .iter()
            .find(|l| l.kind == kind)
            .ok_or_else(|| TestCaseError::fail("kind missing from layout table"))?;
        prop_assume!(len != layout.payload_size);
        let is_size_mismatch = matches!(
            decode(&datagram(kind, &vec![0u8; len])),
            Err(DecodeError::SizeMismatch { actual, .. }) if actual == len
        );
        prop_assert!(is_size_mismatch);
    }
}
