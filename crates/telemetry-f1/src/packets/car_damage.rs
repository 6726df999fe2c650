//! Car damage packet (id 10). Wheel arrays are ordered RL, RR, FL, FR; all
//! byte values are percentages unless noted.

use serde::{Deserialize, Serialize};

use super::MAX_CARS;
use crate::error::{DecodeError, expect_len};
use crate::header::{PacketHeader, PacketId};
use crate::reader::ByteReader;

/// Size of one [`CarDamageData`] entry.
pub const ENTRY_SIZE: usize = 42;

/// Payload bytes after the header.
pub const PAYLOAD_SIZE: usize = MAX_CARS * ENTRY_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarDamageData {
    pub tyres_wear: [f32; 4],
    pub tyres_damage: [u8; 4],
    pub brakes_damage: [u8; 4],
    pub front_left_wing_damage: u8,
    pub front_right_wing_damage: u8,
    pub rear_wing_damage: u8,
    pub floor_damage: u8,
    pub diffuser_damage: u8,
    pub sidepod_damage: u8,
    pub drs_fault: bool,
    pub ers_fault: bool,
    pub gear_box_damage: u8,
    pub engine_damage: u8,
    pub engine_mguh_wear: u8,
    pub engine_es_wear: u8,
    pub engine_ce_wear: u8,
    pub engine_ice_wear: u8,
    pub engine_mguk_wear: u8,
    pub engine_tc_wear: u8,
    pub engine_blown: bool,
    pub engine_seized: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacketCarDamageData {
    pub header: PacketHeader,
    pub car_damage_data: [CarDamageData; MAX_CARS],
}

fn parse_entry(r: &mut ByteReader<'_>) -> Result<CarDamageData, DecodeError> {
    Ok(CarDamageData {
        tyres_wear: r.f32_le_array()?,
        tyres_damage: r.u8_array()?,
        brakes_damage: r.u8_array()?,
        front_left_wing_damage: r.u8()?,
        front_right_wing_damage: r.u8()?,
        rear_wing_damage: r.u8()?,
        floor_damage: r.u8()?,
        diffuser_damage: r.u8()?,
        sidepod_damage: r.u8()?,
        drs_fault: r.flag()?,
        ers_fault: r.flag()?,
        gear_box_damage: r.u8()?,
        engine_damage: r.u8()?,
        engine_mguh_wear: r.u8()?,
        engine_es_wear: r.u8()?,
        engine_ce_wear: r.u8()?,
        engine_ice_wear: r.u8()?,
        engine_mguk_wear: r.u8()?,
        engine_tc_wear: r.u8()?,
        engine_blown: r.flag()?,
        engine_seized: r.flag()?,
    })
}

pub fn parse(header: PacketHeader, payload: &[u8]) -> Result<PacketCarDamageData, DecodeError> {
    expect_len(PacketId::CarDamage, payload, PAYLOAD_SIZE)?;
    let mut r = ByteReader::new(payload);
    Ok(PacketCarDamageData {
        header,
        car_damage_data: r.records(parse_entry)?,
    })
}
