//! Participants packet (id 4): who is driving each car.

use serde::{Deserialize, Serialize};

use super::{MAX_CARS, NAME_LEN};
use crate::appendix::{DriverId, NationalityId, Platform, TeamId};
use crate::error::{DecodeError, expect_len};
use crate::header::{PacketHeader, PacketId};
use crate::reader::ByteReader;

/// Size of one [`ParticipantData`] entry.
pub const ENTRY_SIZE: usize = 58;

/// Payload bytes after the header: active count plus 22 entries.
pub const PAYLOAD_SIZE: usize = 1 + MAX_CARS * ENTRY_SIZE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantData {
    pub ai_controlled: bool,
    pub driver_id: DriverId,
    /// Unique identifier for network players.
    pub network_id: u8,
    pub team_id: TeamId,
    pub my_team: bool,
    pub race_number: u8,
    pub nationality: NationalityId,
    /// Display name, cut at the first NUL. Invalid UTF-8 is replaced.
    pub name: String,
    /// `false` when the player restricts their telemetry.
    pub your_telemetry: bool,
    pub show_online_names: bool,
    pub platform: Platform,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacketParticipantsData {
    pub header: PacketHeader,
    pub num_active_cars: u8,
    pub participants: [ParticipantData; MAX_CARS],
}

impl PacketParticipantsData {
    /// Entries covered by `num_active_cars`.
    pub fn active(&self) -> &[ParticipantData] {
        let n = usize::from(self.num_active_cars);
        self.participants.get(..n).unwrap_or(&self.participants)
    }
}

fn parse_entry(r: &mut ByteReader<'_>) -> Result<ParticipantData, DecodeError> {
    Ok(ParticipantData {
        ai_controlled: r.flag()?,
        driver_id: DriverId(r.u8()?),
        network_id: r.u8()?,
        team_id: TeamId(r.u8()?),
        my_team: r.flag()?,
        race_number: r.u8()?,
        nationality: NationalityId(r.u8()?),
        name: r.fixed_str::<NAME_LEN>()?,
        your_telemetry: r.flag()?,
        show_online_names: r.flag()?,
        platform: r.u8()?.into(),
    })
}

pub fn parse(header: PacketHeader, payload: &[u8]) -> Result<PacketParticipantsData, DecodeError> {
    expect_len(PacketId::Participants, payload, PAYLOAD_SIZE)?;
    let mut r = ByteReader::new(payload);
    Ok(PacketParticipantsData {
        header,
        num_active_cars: r.u8()?,
        participants: r.records(parse_entry)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packets::testing::{PayloadWriter, header_for};

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    const DRIVERS: [(&str, u8, u8); 3] = [("HAMILTON", 7, 0), ("VERSTAPPEN", 9, 2), ("LECLERC", 58, 1)];

    fn payload(active: u8) -> Vec<u8> {
        let mut w = PayloadWriter::new();
        w.u8(active);
        for (i, (name, driver, team)) in DRIVERS.iter().enumerate() {
            let num = u8::try_from(i).unwrap_or(0) + 1;
            w.u8(1).u8(*driver).u8(num).u8(*team).u8(0).u8(num).u8(10).name(name);
            w.u8(1).u8(0).u8(1);
        }
        w.zeros(ENTRY_SIZE * (MAX_CARS - DRIVERS.len()));
        w.build()
    }

    #[test]
    fn fixture_is_schema_length() {
        assert_eq!(payload(3).len(), PAYLOAD_SIZE);
        assert_eq!(PAYLOAD_SIZE, 1277);
    }

    #[test]
    fn parses_named_participants() -> TestResult {
        let p = parse(header_for(PacketId::Participants), &payload(3))?;
        assert_eq!(p.num_active_cars, 3);
        assert_eq!(p.participants.len(), MAX_CARS);
        let active = p.active();
        assert_eq!(active.len(), 3);
        let names: Vec<&str> = active.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["HAMILTON", "VERSTAPPEN", "LECLERC"]);
        let ham = active.first().ok_or("no participant")?;
        assert!(ham.ai_controlled);
        assert_eq!(ham.driver_id.name(), Some("Lewis Hamilton"));
        assert_eq!(ham.team_id.name(), Some("Mercedes"));
        assert_eq!(ham.nationality.name(), Some("British"));
        assert!(ham.your_telemetry);
        assert_eq!(ham.platform, Platform::Steam);
        Ok(())
    }

    #[test]
    fn unused_slots_are_zero_valued_not_truncated() -> TestResult {
        let p = parse(header_for(PacketId::Participants), &payload(3))?;
        let last = p.participants.last().ok_or("no participants")?;
        assert_eq!(last.name, "");
        assert_eq!(last.driver_id, DriverId(0));
        assert_eq!(last.platform, Platform::Unrecognized(0));
        Ok(())
    }

    #[test]
    fn active_count_larger_than_array_is_clamped() -> TestResult {
        let p = parse(header_for(PacketId::Participants), &payload(40))?;
        assert_eq!(p.active().len(), MAX_CARS);
        Ok(())
    }

    #[test]
    fn name_with_invalid_utf8_degrades() -> TestResult {
        let mut raw = payload(1);
        // first entry name starts after count (1) and seven id bytes
        if let Some(b) = raw.get_mut(1 + 7 + 1) {
            *b = 0xFF;
        }
        let p = parse(header_for(PacketId::Participants), &raw)?;
        let first = p.participants.first().ok_or("no participants")?;
        assert_eq!(first.name, "H\u{FFFD}MILTON");
        Ok(())
    }
}
