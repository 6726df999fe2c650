//! Lap data packet (id 2): timing and race state for every car.

use serde::{Deserialize, Serialize};

use super::MAX_CARS;
use crate::appendix::{DriverStatus, PitStatus, ResultStatus, Sector};
use crate::error::{DecodeError, expect_len};
use crate::header::{PacketHeader, PacketId};
use crate::reader::ByteReader;

/// Size of one [`LapData`] entry.
pub const ENTRY_SIZE: usize = 50;

/// Payload bytes after the header: 22 entries plus two time-trial indices.
pub const PAYLOAD_SIZE: usize = MAX_CARS * ENTRY_SIZE + 2;

/// Time-trial car index meaning "no such car".
pub const INVALID_CAR_INDEX: u8 = 255;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LapData {
    pub last_lap_time_in_ms: u32,
    pub current_lap_time_in_ms: u32,
    pub sector1_time_in_ms: u16,
    pub sector1_time_minutes: u8,
    pub sector2_time_in_ms: u16,
    pub sector2_time_minutes: u8,
    pub delta_to_car_in_front_in_ms: u16,
    pub delta_to_race_leader_in_ms: u16,
    /// Metres around the current lap; negative before the line is crossed.
    pub lap_distance: f32,
    pub total_distance: f32,
    /// Seconds.
    pub safety_car_delta: f32,
    pub car_position: u8,
    pub current_lap_num: u8,
    pub pit_status: PitStatus,
    pub num_pit_stops: u8,
    pub sector: Sector,
    pub current_lap_invalid: bool,
    /// Accumulated time penalties in seconds.
    pub penalties: u8,
    pub total_warnings: u8,
    pub corner_cutting_warnings: u8,
    pub num_unserved_drive_through_pens: u8,
    pub num_unserved_stop_go_pens: u8,
    pub grid_position: u8,
    pub driver_status: DriverStatus,
    pub result_status: ResultStatus,
    pub pit_lane_timer_active: bool,
    pub pit_lane_time_in_lane_in_ms: u16,
    pub pit_stop_timer_in_ms: u16,
    pub pit_stop_should_serve_pen: bool,
}

impl LapData {
    /// Sector 1 time including its whole-minute part.
    pub fn sector1_total_ms(&self) -> u32 {
        minutes_and_ms(self.sector1_time_minutes, self.sector1_time_in_ms)
    }

    /// Sector 2 time including its whole-minute part.
    pub fn sector2_total_ms(&self) -> u32 {
        minutes_and_ms(self.sector2_time_minutes, self.sector2_time_in_ms)
    }
}

pub(crate) fn minutes_and_ms(minutes: u8, ms: u16) -> u32 {
    u32::from(minutes)
        .saturating_mul(60_000)
        .saturating_add(u32::from(ms))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacketLapData {
    pub header: PacketHeader,
    pub lap_data: [LapData; MAX_CARS],
    /// [`INVALID_CAR_INDEX`] when there is no personal-best car.
    pub time_trial_pb_car_idx: u8,
    pub time_trial_rival_car_idx: u8,
}

fn parse_entry(r: &mut ByteReader<'_>) -> Result<LapData, DecodeError> {
    Ok(LapData {
        last_lap_time_in_ms: r.u32_le()?,
        current_lap_time_in_ms: r.u32_le()?,
        sector1_time_in_ms: r.u16_le()?,
        sector1_time_minutes: r.u8()?,
        sector2_time_in_ms: r.u16_le()?,
        sector2_time_minutes: r.u8()?,
        delta_to_car_in_front_in_ms: r.u16_le()?,
        delta_to_race_leader_in_ms: r.u16_le()?,
        lap_distance: r.f32_le()?,
        total_distance: r.f32_le()?,
        safety_car_delta: r.f32_le()?,
        car_position: r.u8()?,
        current_lap_num: r.u8()?,
        pit_status: r.u8()?.into(),
        num_pit_stops: r.u8()?,
        sector: r.u8()?.into(),
        current_lap_invalid: r.flag()?,
        penalties: r.u8()?,
        total_warnings: r.u8()?,
        corner_cutting_warnings: r.u8()?,
        num_unserved_drive_through_pens: r.u8()?,
        num_unserved_stop_go_pens: r.u8()?,
        grid_position: r.u8()?,
        driver_status: r.u8()?.into(),
        result_status: r.u8()?.into(),
        pit_lane_timer_active: r.flag()?,
        pit_lane_time_in_lane_in_ms: r.u16_le()?,
        pit_stop_timer_in_ms: r.u16_le()?,
        pit_stop_should_serve_pen: r.flag()?,
    })
}

pub fn parse(header: PacketHeader, payload: &[u8]) -> Result<PacketLapData, DecodeError> {
    expect_len(PacketId::LapData, payload, PAYLOAD_SIZE)?;
    let mut r = ByteReader::new(payload);
    Ok(PacketLapData {
        header,
        lap_data: r.records(parse_entry)?,
        time_trial_pb_car_idx: r.u8()?,
        time_trial_rival_car_idx: r.u8()?,
    })
}
