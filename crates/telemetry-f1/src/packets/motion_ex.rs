//! Extended motion packet (id 13): additional physics for the player car
//! only. Wheel arrays are ordered RL, RR, FL, FR.

use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, expect_len};
use crate::header::{PacketHeader, PacketId};
use crate::reader::ByteReader;

/// Payload bytes after the header: 47 floats.
pub const PAYLOAD_SIZE: usize = 47 * 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacketMotionExData {
    pub header: PacketHeader,
    pub suspension_position: [f32; 4],
    pub suspension_velocity: [f32; 4],
    pub suspension_acceleration: [f32; 4],
    pub wheel_speed: [f32; 4],
    pub wheel_slip_ratio: [f32; 4],
    pub wheel_slip_angle: [f32; 4],
    pub wheel_lat_force: [f32; 4],
    pub wheel_long_force: [f32; 4],
    pub height_of_cog_above_ground: f32,
    /// Local-space velocity, metres per second.
    pub local_velocity: [f32; 3],
    /// Radians per second.
    pub angular_velocity: [f32; 3],
    pub angular_acceleration: [f32; 3],
    /// Radians.
    pub front_wheels_angle: f32,
    pub wheel_vert_force: [f32; 4],
}

pub fn parse(header: PacketHeader, payload: &[u8]) -> Result<PacketMotionExData, DecodeError> {
    expect_len(PacketId::MotionEx, payload, PAYLOAD_SIZE)?;
    let mut r = ByteReader::new(payload);
    Ok(PacketMotionExData {
        header,
        suspension_position: r.f32_le_array()?,
        suspension_velocity: r.f32_le_array()?,
        suspension_acceleration: r.f32_le_array()?,
        wheel_speed: r.f32_le_array()?,
        wheel_slip_ratio: r.f32_le_array()?,
        wheel_slip_angle: r.f32_le_array()?,
        wheel_lat_force: r.f32_le_array()?,
        wheel_long_force: r.f32_le_array()?,
        height_of_cog_above_ground: r.f32_le()?,
        local_velocity: r.f32_le_array()?,
        angular_velocity: r.f32_le_array()?,
        angular_acceleration: r.f32_le_array()?,
        front_wheels_angle: r.f32_le()?,
        wheel_vert_force: r.f32_le_array()?,
    })
}
