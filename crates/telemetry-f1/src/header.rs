//! The 29-byte header shared by every packet kind.
//!
//! | Offset | Size | Field                     |
//! |--------|------|---------------------------|
//! | 0      | 2    | packetFormat              |
//! | 2      | 1    | gameYear                  |
//! | 3      | 1    | gameMajorVersion          |
//! | 4      | 1    | gameMinorVersion          |
//! | 5      | 1    | packetVersion             |
//! | 6      | 1    | packetId                  |
//! | 7      | 8    | sessionUID                |
//! | 15     | 4    | sessionTime               |
//! | 19     | 4    | frameIdentifier           |
//! | 23     | 4    | overallFrameIdentifier    |
//! | 27     | 1    | playerCarIndex            |
//! | 28     | 1    | secondaryPlayerCarIndex   |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;
use crate::reader::ByteReader;

/// Size of the packet header in bytes. Identical for every packet kind.
pub const HEADER_SIZE: usize = 29;

/// `secondaryPlayerCarIndex` value meaning "no second player".
pub const NO_SECONDARY_PLAYER: u8 = 255;

/// Parsed packet header.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PacketHeader {
    /// Protocol season, e.g. `2023`.
    pub packet_format: u16,
    /// Last two digits of the game year.
    pub game_year: u8,
    pub game_major_version: u8,
    pub game_minor_version: u8,
    /// Version of this packet type; every F1 23 kind is version 1.
    pub packet_version: u8,
    /// Raw packet type id. See [`PacketId`].
    pub packet_id: u8,
    /// Opaque identifier shared by every packet of one session.
    pub session_uid: u64,
    /// Session timestamp in seconds.
    pub session_time: f32,
    /// Frame the data was retrieved on; goes back after flashbacks.
    pub frame_identifier: u32,
    /// Frame the data was retrieved on; never goes back.
    pub overall_frame_identifier: u32,
    pub player_car_index: u8,
    /// Raw splitscreen player index; [`NO_SECONDARY_PLAYER`] when absent.
    pub secondary_player_car_index: u8,
}

impl PacketHeader {
    /// Car index of the splitscreen player, if there is one.
    pub fn secondary_player(&self) -> Option<u8> {
        (self.secondary_player_car_index != NO_SECONDARY_PLAYER)
            .then_some(self.secondary_player_car_index)
    }

    /// Typed packet kind, or `None` for an id outside the known set.
    pub fn kind(&self) -> Option<PacketId> {
        PacketId::try_from(self.packet_id).ok()
    }
}

/// Parse the packet header from the start of a datagram.
///
/// Only the length is validated here; format, version and id legality are
/// checked by the [`registry`](crate::registry).
pub fn parse_header(raw: &[u8]) -> Result<PacketHeader, DecodeError> {
    if raw.len() < HEADER_SIZE {
        return Err(DecodeError::TruncatedHeader {
            actual: raw.len(),
            required: HEADER_SIZE,
        });
    }
    let mut r = ByteReader::new(raw);
    Ok(PacketHeader {
        packet_format: r.u16_le()?,
        game_year: r.u8()?,
        game_major_version: r.u8()?,
        game_minor_version: r.u8()?,
        packet_version: r.u8()?,
        packet_id: r.u8()?,
        session_uid: r.u64_le()?,
        session_time: r.f32_le()?,
        frame_identifier: r.u32_le()?,
        overall_frame_identifier: r.u32_le()?,
        player_car_index: r.u8()?,
        secondary_player_car_index: r.u8()?,
    })
}

/// The closed set of packet kinds, keyed by the header's `packetId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum PacketId {
    Motion = 0,
    Session = 1,
    LapData = 2,
    Event = 3,
    Participants = 4,
    CarSetups = 5,
    CarTelemetry = 6,
    CarStatus = 7,
    FinalClassification = 8,
    LobbyInfo = 9,
    CarDamage = 10,
    SessionHistory = 11,
    TyreSets = 12,
    MotionEx = 13,
}

impl PacketId {
    /// All kinds in id order.
    pub const ALL: [PacketId; 14] = [
        PacketId::Motion,
        PacketId::Session,
        PacketId::LapData,
        PacketId::Event,
        PacketId::Participants,
        PacketId::CarSetups,
        PacketId::CarTelemetry,
        PacketId::CarStatus,
        PacketId::FinalClassification,
        PacketId::LobbyInfo,
        PacketId::CarDamage,
        PacketId::SessionHistory,
        PacketId::TyreSets,
        PacketId::MotionEx,
    ];

    pub const fn raw(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            PacketId::Motion => "Motion",
            PacketId::Session => "Session",
            PacketId::LapData => "LapData",
            PacketId::Event => "Event",
            PacketId::Participants => "Participants",
            PacketId::CarSetups => "CarSetups",
            PacketId::CarTelemetry => "CarTelemetry",
            PacketId::CarStatus => "CarStatus",
            PacketId::FinalClassification => "FinalClassification",
            PacketId::LobbyInfo => "LobbyInfo",
            PacketId::CarDamage => "CarDamage",
            PacketId::SessionHistory => "SessionHistory",
            PacketId::TyreSets => "TyreSets",
            PacketId::MotionEx => "MotionEx",
        }
    }
}

impl TryFrom<u8> for PacketId {
    type Error = DecodeError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        PacketId::ALL
            .get(usize::from(raw))
            .copied()
            .ok_or(DecodeError::UnknownPacketId { packet_id: raw })
    }
}

impl fmt::Display for PacketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn header_bytes() -> Vec<u8> {
        let mut buf = Vec::with_capacity(HEADER_SIZE);
        buf.extend_from_slice(&2023u16.to_le_bytes());
        buf.extend_from_slice(&[23, 1, 5, 1, 6]);
        buf.extend_from_slice(&0x0102_0304_0506_0708u64.to_le_bytes());
        buf.extend_from_slice(&12.5f32.to_le_bytes());
        buf.extend_from_slice(&1000u32.to_le_bytes());
        buf.extend_from_slice(&1200u32.to_le_bytes());
        buf.extend_from_slice(&[3, 255]);
        buf
    }

    #[test]
    fn header_is_29_bytes() {
        assert_eq!(header_bytes().len(), HEADER_SIZE);
    }

    #[test]
    fn parse_header_reads_every_field() -> TestResult {
        let h = parse_header(&header_bytes())?;
        assert_eq!(h.packet_format, 2023);
        assert_eq!(h.game_year, 23);
        assert_eq!(h.game_major_version, 1);
        assert_eq!(h.game_minor_version, 5);
        assert_eq!(h.packet_version, 1);
        assert_eq!(h.packet_id, 6);
        assert_eq!(h.session_uid, 0x0102_0304_0506_0708);
        assert!((h.session_time - 12.5).abs() < f32::EPSILON);
        assert_eq!(h.frame_identifier, 1000);
        assert_eq!(h.overall_frame_identifier, 1200);
        assert_eq!(h.player_car_index, 3);
        assert_eq!(h.secondary_player(), None);
        assert_eq!(h.kind(), Some(PacketId::CarTelemetry));
        Ok(())
    }

    #[test]
    fn parse_header_ignores_trailing_bytes() -> TestResult {
        let mut raw = header_bytes();
        raw.extend_from_slice(&[0xAA; 100]);
        assert_eq!(parse_header(&raw)?.packet_id, 6);
        Ok(())
    }

    #[test]
    fn secondary_player_present() -> TestResult {
        let mut raw = header_bytes();
        raw.pop();
        raw.push(7);
        assert_eq!(parse_header(&raw)?.secondary_player(), Some(7));
        Ok(())
    }

    #[test]
    fn parse_header_too_short_errors() {
        for len in [0usize, 1, 10, HEADER_SIZE - 1] {
            let raw = vec![0u8; len];
            assert_eq!(
                parse_header(&raw),
                Err(DecodeError::TruncatedHeader {
                    actual: len,
                    required: HEADER_SIZE
                })
            );
        }
    }

    #[test]
    fn packet_id_round_trips_known_range() -> TestResult {
        for raw in 0u8..14 {
            assert_eq!(PacketId::try_from(raw)?.raw(), raw);
        }
        Ok(())
    }

    #[test]
    fn packet_id_rejects_out_of_range() {
        for raw in [14u8, 15, 200, 255] {
            assert_eq!(
                PacketId::try_from(raw),
                Err(DecodeError::UnknownPacketId { packet_id: raw })
            );
        }
    }
}
