//! Motion packet (id 0): world-space physics for every car.

use serde::{Deserialize, Serialize};

use super::MAX_CARS;
use crate::error::{DecodeError, expect_len};
use crate::header::{PacketHeader, PacketId};
use crate::reader::ByteReader;

/// Size of one [`CarMotionData`] entry.
pub const ENTRY_SIZE: usize = 60;

/// Payload bytes after the header.
pub const PAYLOAD_SIZE: usize = MAX_CARS * ENTRY_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarMotionData {
    /// World position in metres.
    pub world_position: [f32; 3],
    /// World velocity in metres per second.
    pub world_velocity: [f32; 3],
    /// Normalised forward direction; divide by 32767 for a unit vector.
    pub world_forward_dir: [i16; 3],
    /// Normalised right direction; divide by 32767 for a unit vector.
    pub world_right_dir: [i16; 3],
    pub g_force_lateral: f32,
    pub g_force_longitudinal: f32,
    pub g_force_vertical: f32,
    /// Radians.
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacketMotionData {
    pub header: PacketHeader,
    pub car_motion_data: [CarMotionData; MAX_CARS],
}

fn parse_entry(r: &mut ByteReader<'_>) -> Result<CarMotionData, DecodeError> {
    Ok(CarMotionData {
        world_position: r.f32_le_array()?,
        world_velocity: r.f32_le_array()?,
        world_forward_dir: [r.i16_le()?, r.i16_le()?, r.i16_le()?],
        world_right_dir: [r.i16_le()?, r.i16_le()?, r.i16_le()?],
        g_force_lateral: r.f32_le()?,
        g_force_longitudinal: r.f32_le()?,
        g_force_vertical: r.f32_le()?,
        yaw: r.f32_le()?,
        pitch: r.f32_le()?,
        roll: r.f32_le()?,
    })
}

pub fn parse(header: PacketHeader, payload: &[u8]) -> Result<PacketMotionData, DecodeError> {
    expect_len(PacketId::Motion, payload, PAYLOAD_SIZE)?;
    let mut r = ByteReader::new(payload);
    Ok(PacketMotionData {
        header,
        car_motion_data: r.records(parse_entry)?,
    })
}
