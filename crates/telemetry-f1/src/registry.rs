//! Layout registry.
//!
//! Maps `(packet format, packet version, packet id)` to the payload size and
//! decoder for that exact combination. Supporting a new protocol revision
//! means adding a table here; existing decoders stay untouched.

use crate::error::DecodeError;
use crate::header::{HEADER_SIZE, PacketHeader, PacketId};
use crate::packet::Packet;
use crate::packets::{
    car_damage, car_setups, car_status, car_telemetry, event, final_classification, lap_data,
    lobby_info, motion, motion_ex, participants, session, session_history, tyre_sets,
};

/// The one protocol season this build decodes.
pub const PACKET_FORMAT_2023: u16 = 2023;

/// Decoder entry point stored in a [`PacketLayout`].
pub type DecodeFn = fn(PacketHeader, &[u8]) -> Result<Packet, DecodeError>;

/// Everything needed to decode one packet kind at one version.
#[derive(Debug, Clone, Copy)]
pub struct PacketLayout {
    pub kind: PacketId,
    pub packet_version: u8,
    /// Exact payload length after the header.
    pub payload_size: usize,
    decode: DecodeFn,
}

impl PacketLayout {
    const fn new(kind: PacketId, payload_size: usize, decode: DecodeFn) -> Self {
        Self {
            kind,
            packet_version: 1,
            payload_size,
            decode,
        }
    }

    /// Full datagram length, header included.
    pub const fn datagram_size(&self) -> usize {
        HEADER_SIZE + self.payload_size
    }

    /// Run this layout's decoder on a payload (the bytes after the header).
    ///
    /// # Errors
    ///
    /// [`DecodeError::SizeMismatch`] if `payload` is not exactly
    /// [`payload_size`](Self::payload_size) bytes, or a kind-specific error
    /// such as [`DecodeError::UnknownEventCode`].
    pub fn decode(&self, header: PacketHeader, payload: &[u8]) -> Result<Packet, DecodeError> {
        (self.decode)(header, payload)
    }
}

// ── Decoder adapters ─────────────────────────────────────────────────────────

fn decode_motion(h: PacketHeader, p: &[u8]) -> Result<Packet, DecodeError> {
    motion::parse(h, p).map(Packet::Motion)
}

fn decode_session(h: PacketHeader, p: &[u8]) -> Result<Packet, DecodeError> {
    session::parse(h, p).map(Packet::Session)
}

fn decode_lap_data(h: PacketHeader, p: &[u8]) -> Result<Packet, DecodeError> {
    lap_data::parse(h, p).map(Packet::LapData)
}

fn decode_event(h: PacketHeader, p: &[u8]) -> Result<Packet, DecodeError> {
    event::parse(h, p).map(Packet::Event)
}

fn decode_participants(h: PacketHeader, p: &[u8]) -> Result<Packet, DecodeError> {
    participants::parse(h, p).map(Packet::Participants)
}

fn decode_car_setups(h: PacketHeader, p: &[u8]) -> Result<Packet, DecodeError> {
    car_setups::parse(h, p).map(Packet::CarSetups)
}

fn decode_car_telemetry(h: PacketHeader, p: &[u8]) -> Result<Packet, DecodeError> {
    car_telemetry::parse(h, p).map(Packet::CarTelemetry)
}

fn decode_car_status(h: PacketHeader, p: &[u8]) -> Result<Packet, DecodeError> {
    car_status::parse(h, p).map(Packet::CarStatus)
}

fn decode_final_classification(h: PacketHeader, p: &[u8]) -> Result<Packet, DecodeError> {
    final_classification::parse(h, p).map(Packet::FinalClassification)
}

fn decode_lobby_info(h: PacketHeader, p: &[u8]) -> Result<Packet, DecodeError> {
    lobby_info::parse(h, p).map(Packet::LobbyInfo)
}

fn decode_car_damage(h: PacketHeader, p: &[u8]) -> Result<Packet, DecodeError> {
    car_damage::parse(h, p).map(Packet::CarDamage)
}

fn decode_session_history(h: PacketHeader, p: &[u8]) -> Result<Packet, DecodeError> {
    session_history::parse(h, p).map(Packet::SessionHistory)
}

fn decode_tyre_sets(h: PacketHeader, p: &[u8]) -> Result<Packet, DecodeError> {
    tyre_sets::parse(h, p).map(Packet::TyreSets)
}

fn decode_motion_ex(h: PacketHeader, p: &[u8]) -> Result<Packet, DecodeError> {
    motion_ex::parse(h, p).map(Packet::MotionEx)
}

// ── Tables ───────────────────────────────────────────────────────────────────

static LAYOUTS_2023: [PacketLayout; 14] = [
    PacketLayout::new(PacketId::Motion, motion::PAYLOAD_SIZE, decode_motion),
    PacketLayout::new(PacketId::Session, session::PAYLOAD_SIZE, decode_session),
    PacketLayout::new(PacketId::LapData, lap_data::PAYLOAD_SIZE, decode_lap_data),
    PacketLayout::new(PacketId::Event, event::PAYLOAD_SIZE, decode_event),
    PacketLayout::new(
        PacketId::Participants,
        participants::PAYLOAD_SIZE,
        decode_participants,
    ),
    PacketLayout::new(PacketId::CarSetups, car_setups::PAYLOAD_SIZE, decode_car_setups),
    PacketLayout::new(
        PacketId::CarTelemetry,
        car_telemetry::PAYLOAD_SIZE,
        decode_car_telemetry,
    ),
    PacketLayout::new(PacketId::CarStatus, car_status::PAYLOAD_SIZE, decode_car_status),
    PacketLayout::new(
        PacketId::FinalClassification,
        final_classification::PAYLOAD_SIZE,
        decode_final_classification,
    ),
    PacketLayout::new(PacketId::LobbyInfo, lobby_info::PAYLOAD_SIZE, decode_lobby_info),
    PacketLayout::new(PacketId::CarDamage, car_damage::PAYLOAD_SIZE, decode_car_damage),
    PacketLayout::new(
        PacketId::SessionHistory,
        session_history::PAYLOAD_SIZE,
        decode_session_history,
    ),
    PacketLayout::new(PacketId::TyreSets, tyre_sets::PAYLOAD_SIZE, decode_tyre_sets),
    PacketLayout::new(PacketId::MotionEx, motion_ex::PAYLOAD_SIZE, decode_motion_ex),
];

/// Every supported format with its layout table.
static FORMATS: [(u16, &[PacketLayout]); 1] = [(PACKET_FORMAT_2023, &LAYOUTS_2023)];

/// The layout table for [`PACKET_FORMAT_2023`], in packet id order.
pub fn layouts() -> &'static [PacketLayout] {
    &LAYOUTS_2023
}

/// Select the layout for a decoded header.
///
/// # Errors
///
/// - [`DecodeError::UnsupportedFormat`] if `packet_format` has no table.
/// - [`DecodeError::UnknownPacketId`] if `packet_id` is outside 0–13.
/// - [`DecodeError::UnsupportedPacketVersion`] if the kind has no layout for
///   the header's `packet_version`.
pub fn lookup(header: &PacketHeader) -> Result<&'static PacketLayout, DecodeError> {
    let table = FORMATS
        .iter()
        .find(|(format, _)| *format == header.packet_format)
        .map(|(_, table)| *table)
        .ok_or(DecodeError::UnsupportedFormat {
            format: header.packet_format,
            expected: PACKET_FORMAT_2023,
        })?;
    let kind = PacketId::try_from(header.packet_id)?;
    table
        .iter()
        .find(|layout| layout.kind == kind && layout.packet_version == header.packet_version)
        .ok_or(DecodeError::UnsupportedPacketVersion {
            kind,
            version: header.packet_version,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn header(format: u16, version: u8, id: u8) -> PacketHeader {
        PacketHeader {
            packet_format: format,
            packet_version: version,
            packet_id: id,
            ..PacketHeader::default()
        }
    }

    #[test]
    fn table_has_one_layout_per_id_in_order() {
        let kinds: Vec<PacketId> = layouts().iter().map(|l| l.kind).collect();
        assert_eq!(kinds, PacketId::ALL);
    }

    #[test]
    fn datagram_sizes_match_published_totals() {
        let totals: Vec<usize> = layouts().iter().map(PacketLayout::datagram_size).collect();
        assert_eq!(
            totals,
            [1349, 644, 1131, 45, 1306, 1107, 1352, 1239, 1020, 1218, 953, 1460, 231, 217]
        );
    }

    #[test]
    fn lookup_returns_matching_layout() -> TestResult {
        for kind in PacketId::ALL {
            let layout = lookup(&header(2023, 1, kind.raw()))?;
            assert_eq!(layout.kind, kind);
            assert_eq!(layout.packet_version, 1);
        }
        Ok(())
    }

    #[test]
    fn lookup_rejects_other_seasons() {
        for format in [0u16, 2022, 2024, 2025, u16::MAX] {
            assert_eq!(
                lookup(&header(format, 1, 0)).map(|l| l.kind),
                Err(DecodeError::UnsupportedFormat {
                    format,
                    expected: PACKET_FORMAT_2023
                })
            );
        }
    }

    #[test]
    fn lookup_rejects_unknown_ids() {
        for id in [14u8, 15, 100, 255] {
            assert_eq!(
                lookup(&header(2023, 1, id)).map(|l| l.kind),
                Err(DecodeError::UnknownPacketId { packet_id: id })
            );
        }
    }

    #[test]
    fn lookup_rejects_unknown_versions() {
        assert_eq!(
            lookup(&header(2023, 2, 6)).map(|l| l.kind),
            Err(DecodeError::UnsupportedPacketVersion {
                kind: PacketId::CarTelemetry,
                version: 2
            })
        );
        assert!(matches!(
            lookup(&header(2023, 0, 0)),
            Err(DecodeError::UnsupportedPacketVersion { version: 0, .. })
        ));
    }
}
