//! Event packet (id 3): a 4-byte ASCII code followed by a 12-byte detail
//! area whose shape depends on the code.
//!
//! The code set is closed per protocol season. An unknown code fails the
//! decode because the detail shape is unknown; bytes past a known code's
//! sub-record are ignored.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::appendix::{ButtonFlags, InfringementType, PenaltyType};
use crate::error::{DecodeError, expect_len};
use crate::header::{PacketHeader, PacketId};
use crate::reader::ByteReader;

/// Width of the event code.
pub const CODE_LEN: usize = 4;

/// Width of the detail union that follows the code.
pub const DETAIL_LEN: usize = 12;

/// Payload bytes after the header.
pub const PAYLOAD_SIZE: usize = CODE_LEN + DETAIL_LEN;

/// The F1 23 event codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCode {
    SessionStarted,
    SessionEnded,
    FastestLap,
    Retirement,
    DrsEnabled,
    DrsDisabled,
    TeamMateInPits,
    ChequeredFlag,
    RaceWinner,
    PenaltyIssued,
    SpeedTrapTriggered,
    StartLights,
    LightsOut,
    DriveThroughServed,
    StopGoServed,
    Flashback,
    ButtonStatus,
    RedFlag,
    Overtake,
}

impl EventCode {
    pub const ALL: [EventCode; 19] = [
        EventCode::SessionStarted,
        EventCode::SessionEnded,
        EventCode::FastestLap,
        EventCode::Retirement,
        EventCode::DrsEnabled,
        EventCode::DrsDisabled,
        EventCode::TeamMateInPits,
        EventCode::ChequeredFlag,
        EventCode::RaceWinner,
        EventCode::PenaltyIssued,
        EventCode::SpeedTrapTriggered,
        EventCode::StartLights,
        EventCode::LightsOut,
        EventCode::DriveThroughServed,
        EventCode::StopGoServed,
        EventCode::Flashback,
        EventCode::ButtonStatus,
        EventCode::RedFlag,
        EventCode::Overtake,
    ];

    /// Wire representation.
    pub const fn as_bytes(self) -> [u8; CODE_LEN] {
        match self {
            EventCode::SessionStarted => *b"SSTA",
            EventCode::SessionEnded => *b"SEND",
            EventCode::FastestLap => *b"FTLP",
            EventCode::Retirement => *b"RTMT",
            EventCode::DrsEnabled => *b"DRSE",
            EventCode::DrsDisabled => *b"DRSD",
            EventCode::TeamMateInPits => *b"TMPT",
            EventCode::ChequeredFlag => *b"CHQF",
            EventCode::RaceWinner => *b"RCWN",
            EventCode::PenaltyIssued => *b"PENA",
            EventCode::SpeedTrapTriggered => *b"SPTP",
            EventCode::StartLights => *b"STLG",
            EventCode::LightsOut => *b"LGOT",
            EventCode::DriveThroughServed => *b"DTSV",
            EventCode::StopGoServed => *b"SGSV",
            EventCode::Flashback => *b"FLBK",
            EventCode::ButtonStatus => *b"BUTN",
            EventCode::RedFlag => *b"RDFL",
            EventCode::Overtake => *b"OVTK",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EventCode::SessionStarted => "SSTA",
            EventCode::SessionEnded => "SEND",
            EventCode::FastestLap => "FTLP",
            EventCode::Retirement => "RTMT",
            EventCode::DrsEnabled => "DRSE",
            EventCode::DrsDisabled => "DRSD",
            EventCode::TeamMateInPits => "TMPT",
            EventCode::ChequeredFlag => "CHQF",
            EventCode::RaceWinner => "RCWN",
            EventCode::PenaltyIssued => "PENA",
            EventCode::SpeedTrapTriggered => "SPTP",
            EventCode::StartLights => "STLG",
            EventCode::LightsOut => "LGOT",
            EventCode::DriveThroughServed => "DTSV",
            EventCode::StopGoServed => "SGSV",
            EventCode::Flashback => "FLBK",
            EventCode::ButtonStatus => "BUTN",
            EventCode::RedFlag => "RDFL",
            EventCode::Overtake => "OVTK",
        }
    }
}

impl TryFrom<[u8; CODE_LEN]> for EventCode {
    type Error = DecodeError;

    fn try_from(code: [u8; CODE_LEN]) -> Result<Self, Self::Error> {
        EventCode::ALL
            .into_iter()
            .find(|c| c.as_bytes() == code)
            .ok_or(DecodeError::UnknownEventCode { code })
    }
}

impl fmt::Display for EventCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `PENA` details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Penalty {
    pub penalty_type: PenaltyType,
    pub infringement_type: InfringementType,
    pub vehicle_idx: u8,
    pub other_vehicle_idx: u8,
    /// Time gained, or time spent doing the action, in seconds.
    pub time: u8,
    pub lap_num: u8,
    pub places_gained: u8,
}

/// `SPTP` details.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedTrap {
    pub vehicle_idx: u8,
    /// km/h.
    pub speed: f32,
    pub is_overall_fastest_in_session: bool,
    pub is_driver_fastest_in_session: bool,
    pub fastest_vehicle_idx_in_session: u8,
    pub fastest_speed_in_session: f32,
}

/// Decoded event, one variant per code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EventDetail {
    SessionStarted,
    SessionEnded,
    FastestLap {
        vehicle_idx: u8,
        /// Seconds.
        lap_time: f32,
    },
    Retirement {
        vehicle_idx: u8,
    },
    DrsEnabled,
    DrsDisabled,
    TeamMateInPits {
        vehicle_idx: u8,
    },
    ChequeredFlag,
    RaceWinner {
        vehicle_idx: u8,
    },
    Penalty(Penalty),
    SpeedTrap(SpeedTrap),
    StartLights {
        num_lights: u8,
    },
    LightsOut,
    DriveThroughServed {
        vehicle_idx: u8,
    },
    StopGoServed {
        vehicle_idx: u8,
    },
    Flashback {
        frame_identifier: u32,
        session_time: f32,
    },
    Buttons {
        button_status: ButtonFlags,
    },
    RedFlag,
    Overtake {
        overtaking_vehicle_idx: u8,
        being_overtaken_vehicle_idx: u8,
    },
}

impl EventDetail {
    /// Decode the sub-record for `code` from the start of `detail`.
    ///
    /// Bytes past the sub-record are ignored.
    ///
    /// # Errors
    ///
    /// [`DecodeError::UnknownEventCode`] if `code` is not an F1 23 code, or
    /// [`DecodeError::Overrun`] if `detail` is too short for the sub-record.
    pub fn parse(code: [u8; CODE_LEN], detail: &[u8]) -> Result<Self, DecodeError> {
        let code = EventCode::try_from(code)?;
        let mut r = ByteReader::new(detail);
        let event = match code {
            EventCode::SessionStarted => EventDetail::SessionStarted,
            EventCode::SessionEnded => EventDetail::SessionEnded,
            EventCode::FastestLap => EventDetail::FastestLap {
                vehicle_idx: r.u8()?,
                lap_time: r.f32_le()?,
            },
            EventCode::Retirement => EventDetail::Retirement {
                vehicle_idx: r.u8()?,
            },
            EventCode::DrsEnabled => EventDetail::DrsEnabled,
            EventCode::DrsDisabled => EventDetail::DrsDisabled,
            EventCode::TeamMateInPits => EventDetail::TeamMateInPits {
                vehicle_idx: r.u8()?,
            },
            EventCode::ChequeredFlag => EventDetail::ChequeredFlag,
            EventCode::RaceWinner => EventDetail::RaceWinner {
                vehicle_idx: r.u8()?,
            },
            EventCode::PenaltyIssued => EventDetail::Penalty(Penalty {
                penalty_type: r.u8()?.into(),
                infringement_type: r.u8()?.into(),
                vehicle_idx: r.u8()?,
                other_vehicle_idx: r.u8()?,
                time: r.u8()?,
                lap_num: r.u8()?,
                places_gained: r.u8()?,
            }),
            EventCode::SpeedTrapTriggered => EventDetail::SpeedTrap(SpeedTrap {
                vehicle_idx: r.u8()?,
                speed: r.f32_le()?,
                is_overall_fastest_in_session: r.flag()?,
                is_driver_fastest_in_session: r.flag()?,
                fastest_vehicle_idx_in_session: r.u8()?,
                fastest_speed_in_session: r.f32_le()?,
            }),
            EventCode::StartLights => EventDetail::StartLights {
                num_lights: r.u8()?,
            },
            EventCode::LightsOut => EventDetail::LightsOut,
            EventCode::DriveThroughServed => EventDetail::DriveThroughServed {
                vehicle_idx: r.u8()?,
            },
            EventCode::StopGoServed => EventDetail::StopGoServed {
                vehicle_idx: r.u8()?,
            },
            EventCode::Flashback => EventDetail::Flashback {
                frame_identifier: r.u32_le()?,
                session_time: r.f32_le()?,
            },
            EventCode::ButtonStatus => EventDetail::Buttons {
                button_status: ButtonFlags::from_bits_retain(r.u32_le()?),
            },
            EventCode::RedFlag => EventDetail::RedFlag,
            EventCode::Overtake => EventDetail::Overtake {
                overtaking_vehicle_idx: r.u8()?,
                being_overtaken_vehicle_idx: r.u8()?,
            },
        };
        Ok(event)
    }

    pub fn code(&self) -> EventCode {
        match self {
            EventDetail::SessionStarted => EventCode::SessionStarted,
            EventDetail::SessionEnded => EventCode::SessionEnded,
            EventDetail::FastestLap { .. } => EventCode::FastestLap,
            EventDetail::Retirement { .. } => EventCode::Retirement,
            EventDetail::DrsEnabled => EventCode::DrsEnabled,
            EventDetail::DrsDisabled => EventCode::DrsDisabled,
            EventDetail::TeamMateInPits { .. } => EventCode::TeamMateInPits,
            EventDetail::ChequeredFlag => EventCode::ChequeredFlag,
            EventDetail::RaceWinner { .. } => EventCode::RaceWinner,
            EventDetail::Penalty(_) => EventCode::PenaltyIssued,
            EventDetail::SpeedTrap(_) => EventCode::SpeedTrapTriggered,
            EventDetail::StartLights { .. } => EventCode::StartLights,
            EventDetail::LightsOut => EventCode::LightsOut,
            EventDetail::DriveThroughServed { .. } => EventCode::DriveThroughServed,
            EventDetail::StopGoServed { .. } => EventCode::StopGoServed,
            EventDetail::Flashback { .. } => EventCode::Flashback,
            EventDetail::Buttons { .. } => EventCode::ButtonStatus,
            EventDetail::RedFlag => EventCode::RedFlag,
            EventDetail::Overtake { .. } => EventCode::Overtake,
        }
    }

    /// Car the event is primarily about, when it names one.
    pub fn vehicle_idx(&self) -> Option<u8> {
        match *self {
            EventDetail::FastestLap { vehicle_idx, .. }
            | EventDetail::Retirement { vehicle_idx }
            | EventDetail::TeamMateInPits { vehicle_idx }
            | EventDetail::RaceWinner { vehicle_idx }
            | EventDetail::DriveThroughServed { vehicle_idx }
            | EventDetail::StopGoServed { vehicle_idx } => Some(vehicle_idx),
            EventDetail::Penalty(p) => Some(p.vehicle_idx),
            EventDetail::SpeedTrap(s) => Some(s.vehicle_idx),
            EventDetail::Overtake {
                overtaking_vehicle_idx,
                ..
            } => Some(overtaking_vehicle_idx),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacketEventData {
    pub header: PacketHeader,
    pub details: EventDetail,
}

impl PacketEventData {
    pub fn code(&self) -> EventCode {
        self.details.code()
    }
}

pub fn parse(header: PacketHeader, payload: &[u8]) -> Result<PacketEventData, DecodeError> {
    expect_len(PacketId::Event, payload, PAYLOAD_SIZE)?;
    let mut r = ByteReader::new(payload);
    let code = r.u8_array::<CODE_LEN>()?;
    Ok(PacketEventData {
        header,
        details: EventDetail::parse(code, r.rest())?,
    })
}
