//! Session history packet (id 11): lap and tyre-stint history for one car.
//!
//! The game cycles through cars, sending one of these per car. Each packet
//! stands alone; merging them is up to the caller.

use serde::{Deserialize, Serialize};

use super::lap_data::minutes_and_ms;
use crate::appendix::{ActualTyreCompound, LapValidFlags, VisualTyreCompound};
use crate::error::{DecodeError, expect_len};
use crate::header::{PacketHeader, PacketId};
use crate::reader::ByteReader;

/// Lap slots in one packet.
pub const MAX_LAPS: usize = 100;

/// Tyre stint slots in one packet.
pub const MAX_TYRE_STINTS: usize = 8;

/// Size of one [`LapHistoryData`] entry.
pub const LAP_ENTRY_SIZE: usize = 14;

/// Size of one [`TyreStintHistoryData`] entry.
pub const STINT_ENTRY_SIZE: usize = 3;

/// Payload bytes after the header.
pub const PAYLOAD_SIZE: usize = 7 + MAX_LAPS * LAP_ENTRY_SIZE + MAX_TYRE_STINTS * STINT_ENTRY_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LapHistoryData {
    pub lap_time_in_ms: u32,
    pub sector1_time_in_ms: u16,
    pub sector1_time_minutes: u8,
    pub sector2_time_in_ms: u16,
    pub sector2_time_minutes: u8,
    pub sector3_time_in_ms: u16,
    pub sector3_time_minutes: u8,
    pub lap_valid_bit_flags: LapValidFlags,
}

impl LapHistoryData {
    /// Sector times in milliseconds with their minute parts folded in.
    pub fn sector_times_ms(&self) -> [u32; 3] {
        [
            minutes_and_ms(self.sector1_time_minutes, self.sector1_time_in_ms),
            minutes_and_ms(self.sector2_time_minutes, self.sector2_time_in_ms),
            minutes_and_ms(self.sector3_time_minutes, self.sector3_time_in_ms),
        ]
    }

    pub fn is_lap_valid(&self) -> bool {
        self.lap_valid_bit_flags.contains(LapValidFlags::LAP)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TyreStintHistoryData {
    /// Lap the stint ended on; 255 for the current stint.
    pub end_lap: u8,
    pub tyre_actual_compound: ActualTyreCompound,
    pub tyre_visual_compound: VisualTyreCompound,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacketSessionHistoryData {
    pub header: PacketHeader,
    pub car_idx: u8,
    /// Laps in the data, including the current partial lap.
    pub num_laps: u8,
    pub num_tyre_stints: u8,
    pub best_lap_time_lap_num: u8,
    pub best_sector1_lap_num: u8,
    pub best_sector2_lap_num: u8,
    pub best_sector3_lap_num: u8,
    /// Always [`MAX_LAPS`] long; only the first `num_laps` are meaningful.
    pub lap_history_data: Vec<LapHistoryData>,
    pub tyre_stints_history_data: [TyreStintHistoryData; MAX_TYRE_STINTS],
}

impl PacketSessionHistoryData {
    /// Laps covered by `num_laps`.
    pub fn laps(&self) -> &[LapHistoryData] {
        let n = usize::from(self.num_laps);
        self.lap_history_data.get(..n).unwrap_or(&self.lap_history_data)
    }

    /// Stints covered by `num_tyre_stints`.
    pub fn tyre_stints(&self) -> &[TyreStintHistoryData] {
        let n = usize::from(self.num_tyre_stints);
        self.tyre_stints_history_data
            .get(..n)
            .unwrap_or(&self.tyre_stints_history_data)
    }
}

fn parse_lap(r: &mut ByteReader<'_>) -> Result<LapHistoryData, DecodeError> {
    Ok(LapHistoryData {
        lap_time_in_ms: r.u32_le()?,
        sector1_time_in_ms: r.u16_le()?,
        sector1_time_minutes: r.u8()?,
        sector2_time_in_ms: r.u16_le()?,
        sector2_time_minutes: r.u8()?,
        sector3_time_in_ms: r.u16_le()?,
        sector3_time_minutes: r.u8()?,
        lap_valid_bit_flags: LapValidFlags::from_bits_retain(r.u8()?),
    })
}

fn parse_stint(r: &mut ByteReader<'_>) -> Result<TyreStintHistoryData, DecodeError> {
    Ok(TyreStintHistoryData {
        end_lap: r.u8()?,
        tyre_actual_compound: r.u8()?.into(),
        tyre_visual_compound: r.u8()?.into(),
    })
}

pub fn parse(header: PacketHeader, payload: &[u8]) -> Result<PacketSessionHistoryData, DecodeError> {
    expect_len(PacketId::SessionHistory, payload, PAYLOAD_SIZE)?;
    let mut r = ByteReader::new(payload);
    Ok(PacketSessionHistoryData {
        header,
        car_idx: r.u8()?,
        num_laps: r.u8()?,
        num_tyre_stints: r.u8()?,
        best_lap_time_lap_num: r.u8()?,
        best_sector1_lap_num: r.u8()?,
        best_sector2_lap_num: r.u8()?,
        best_sector3_lap_num: r.u8()?,
        lap_history_data: r.record_vec(MAX_LAPS, parse_lap)?,
        tyre_stints_history_data: r.records(parse_stint)?,
    })
}
