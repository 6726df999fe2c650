//! Car telemetry packet (id 6): driver inputs, engine and tyre readings.
//!
//! Wheel arrays are ordered RL, RR, FL, FR.

use serde::{Deserialize, Serialize};

use super::MAX_CARS;
use crate::appendix::{MfdPanel, SurfaceType};
use crate::error::{DecodeError, expect_len};
use crate::header::{PacketHeader, PacketId};
use crate::reader::ByteReader;

/// Size of one [`CarTelemetryData`] entry.
pub const ENTRY_SIZE: usize = 60;

/// Payload bytes after the header: 22 entries, two MFD indices and the
/// suggested gear.
pub const PAYLOAD_SIZE: usize = MAX_CARS * ENTRY_SIZE + 3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarTelemetryData {
    /// km/h.
    pub speed: u16,
    /// 0.0 to 1.0.
    pub throttle: f32,
    /// -1.0 (full lock left) to 1.0 (full lock right).
    pub steer: f32,
    pub brake: f32,
    /// 0 to 100.
    pub clutch: u8,
    /// 1-8, 0 neutral, -1 reverse.
    pub gear: i8,
    pub engine_rpm: u16,
    pub drs: bool,
    pub rev_lights_percent: u8,
    /// Bit 0 is the leftmost LED, bit 14 the rightmost.
    pub rev_lights_bit_value: u16,
    /// Celsius.
    pub brakes_temperature: [u16; 4],
    pub tyres_surface_temperature: [u8; 4],
    pub tyres_inner_temperature: [u8; 4],
    pub engine_temperature: u16,
    /// PSI.
    pub tyres_pressure: [f32; 4],
    pub surface_type: [SurfaceType; 4],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacketCarTelemetryData {
    pub header: PacketHeader,
    pub car_telemetry_data: [CarTelemetryData; MAX_CARS],
    pub mfd_panel_index: MfdPanel,
    pub mfd_panel_index_secondary_player: MfdPanel,
    /// 1-8, or 0 when no gear is suggested.
    pub suggested_gear: i8,
}

impl PacketCarTelemetryData {
    pub fn suggested_gear(&self) -> Option<i8> {
        (self.suggested_gear != 0).then_some(self.suggested_gear)
    }
}

fn parse_entry(r: &mut ByteReader<'_>) -> Result<CarTelemetryData, DecodeError> {
    Ok(CarTelemetryData {
        speed: r.u16_le()?,
        throttle: r.f32_le()?,
        steer: r.f32_le()?,
        brake: r.f32_le()?,
        clutch: r.u8()?,
        gear: r.i8()?,
        engine_rpm: r.u16_le()?,
        drs: r.flag()?,
        rev_lights_percent: r.u8()?,
        rev_lights_bit_value: r.u16_le()?,
        brakes_temperature: r.u16_le_array()?,
        tyres_surface_temperature: r.u8_array()?,
        tyres_inner_temperature: r.u8_array()?,
        engine_temperature: r.u16_le()?,
        tyres_pressure: r.f32_le_array()?,
        surface_type: r.u8_array::<4>()?.map(SurfaceType::from),
    })
}

pub fn parse(header: PacketHeader, payload: &[u8]) -> Result<PacketCarTelemetryData, DecodeError> {
    expect_len(PacketId::CarTelemetry, payload, PAYLOAD_SIZE)?;
    let mut r = ByteReader::new(payload);
    Ok(PacketCarTelemetryData {
        header,
        car_telemetry_data: r.records(parse_entry)?,
        mfd_panel_index: r.u8()?.into(),
        mfd_panel_index_secondary_player: r.u8()?.into(),
        suggested_gear: r.i8()?,
    })
}
