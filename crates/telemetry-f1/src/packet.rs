//! The decoded packet union and the end-to-end [`decode`] entry point.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::DecodeError;
use crate::header::{HEADER_SIZE, PacketHeader, PacketId, parse_header};
use crate::packets::{
    car_damage::PacketCarDamageData, car_setups::PacketCarSetupData,
    car_status::PacketCarStatusData, car_telemetry::PacketCarTelemetryData,
    event::PacketEventData, final_classification::PacketFinalClassificationData,
    lap_data::PacketLapData, lobby_info::PacketLobbyInfoData, motion::PacketMotionData,
    motion_ex::PacketMotionExData, participants::PacketParticipantsData,
    session::PacketSessionData, session_history::PacketSessionHistoryData,
    tyre_sets::PacketTyreSetsData,
};
use crate::registry;

/// One decoded datagram, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[expect(
    clippy::large_enum_variant,
    reason = "packets are moved once from decoder to caller"
)]
pub enum Packet {
    Motion(PacketMotionData),
    Session(PacketSessionData),
    LapData(PacketLapData),
    Event(PacketEventData),
    Participants(PacketParticipantsData),
    CarSetups(PacketCarSetupData),
    CarTelemetry(PacketCarTelemetryData),
    CarStatus(PacketCarStatusData),
    FinalClassification(PacketFinalClassificationData),
    LobbyInfo(PacketLobbyInfoData),
    CarDamage(PacketCarDamageData),
    SessionHistory(PacketSessionHistoryData),
    TyreSets(PacketTyreSetsData),
    MotionEx(PacketMotionExData),
}

impl Packet {
    pub fn header(&self) -> &PacketHeader {
        match self {
            Packet::Motion(p) => &p.header,
            Packet::Session(p) => &p.header,
            Packet::LapData(p) => &p.header,
            Packet::Event(p) => &p.header,
            Packet::Participants(p) => &p.header,
            Packet::CarSetups(p) => &p.header,
            Packet::CarTelemetry(p) => &p.header,
            Packet::CarStatus(p) => &p.header,
            Packet::FinalClassification(p) => &p.header,
            Packet::LobbyInfo(p) => &p.header,
            Packet::CarDamage(p) => &p.header,
            Packet::SessionHistory(p) => &p.header,
            Packet::TyreSets(p) => &p.header,
            Packet::MotionEx(p) => &p.header,
        }
    }

    pub fn packet_id(&self) -> PacketId {
        match self {
            Packet::Motion(_) => PacketId::Motion,
            Packet::Session(_) => PacketId::Session,
            Packet::LapData(_) => PacketId::LapData,
            Packet::Event(_) => PacketId::Event,
            Packet::Participants(_) => PacketId::Participants,
            Packet::CarSetups(_) => PacketId::CarSetups,
            Packet::CarTelemetry(_) => PacketId::CarTelemetry,
            Packet::CarStatus(_) => PacketId::CarStatus,
            Packet::FinalClassification(_) => PacketId::FinalClassification,
            Packet::LobbyInfo(_) => PacketId::LobbyInfo,
            Packet::CarDamage(_) => PacketId::CarDamage,
            Packet::SessionHistory(_) => PacketId::SessionHistory,
            Packet::TyreSets(_) => PacketId::TyreSets,
            Packet::MotionEx(_) => PacketId::MotionEx,
        }
    }

    /// Session this packet belongs to.
    pub fn session_uid(&self) -> u64 {
        self.header().session_uid
    }
}

/// Decode one UDP datagram.
///
/// Checks run in order: header length, packet format, packet id, packet
/// version, payload length, then kind-specific content (event code). The
/// first failing check is returned; no partial packet is ever produced.
///
/// # Errors
///
/// Any [`DecodeError`] variant describing the first violated expectation.
pub fn decode(datagram: &[u8]) -> Result<Packet, DecodeError> {
    match dispatch(datagram) {
        Ok(packet) => {
            trace!(
                packet_id = packet.packet_id().raw(),
                frame = packet.header().frame_identifier,
                "decoded F1 packet"
            );
            Ok(packet)
        }
        Err(err) => {
            debug!(error = %err, len = datagram.len(), "rejected F1 datagram");
            Err(err)
        }
    }
}

fn dispatch(datagram: &[u8]) -> Result<Packet, DecodeError> {
    let header = parse_header(datagram)?;
    let layout = registry::lookup(&header)?;
    let payload = datagram.get(HEADER_SIZE..).unwrap_or_default();
    layout.decode(header, payload)
}
