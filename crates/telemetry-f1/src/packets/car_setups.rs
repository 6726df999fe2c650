//! Car setups packet (id 5). Other players' setups are zeroed in online
//! sessions.

use serde::{Deserialize, Serialize};

use super::MAX_CARS;
use crate::error::{DecodeError, expect_len};
use crate::header::{PacketHeader, PacketId};
use crate::reader::ByteReader;

/// Size of one [`CarSetupData`] entry.
pub const ENTRY_SIZE: usize = 49;

/// Payload bytes after the header.
pub const PAYLOAD_SIZE: usize = MAX_CARS * ENTRY_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarSetupData {
    pub front_wing: u8,
    pub rear_wing: u8,
    /// Differential on throttle, percent.
    pub on_throttle: u8,
    pub off_throttle: u8,
    pub front_camber: f32,
    pub rear_camber: f32,
    pub front_toe: f32,
    pub rear_toe: f32,
    pub front_suspension: u8,
    pub rear_suspension: u8,
    pub front_anti_roll_bar: u8,
    pub rear_anti_roll_bar: u8,
    pub front_suspension_height: u8,
    pub rear_suspension_height: u8,
    pub brake_pressure: u8,
    pub brake_bias: u8,
    /// PSI.
    pub rear_left_tyre_pressure: f32,
    pub rear_right_tyre_pressure: f32,
    pub front_left_tyre_pressure: f32,
    pub front_right_tyre_pressure: f32,
    pub ballast: u8,
    pub fuel_load: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacketCarSetupData {
    pub header: PacketHeader,
    pub car_setups: [CarSetupData; MAX_CARS],
}

fn parse_entry(r: &mut ByteReader<'_>) -> Result<CarSetupData, DecodeError> {
    Ok(CarSetupData {
        front_wing: r.u8()?,
        rear_wing: r.u8()?,
        on_throttle: r.u8()?,
        off_throttle: r.u8()?,
        front_camber: r.f32_le()?,
        rear_camber: r.f32_le()?,
        front_toe: r.f32_le()?,
        rear_toe: r.f32_le()?,
        front_suspension: r.u8()?,
        rear_suspension: r.u8()?,
        front_anti_roll_bar: r.u8()?,
        rear_anti_roll_bar: r.u8()?,
        front_suspension_height: r.u8()?,
        rear_suspension_height: r.u8()?,
        brake_pressure: r.u8()?,
        brake_bias: r.u8()?,
        rear_left_tyre_pressure: r.f32_le()?,
        rear_right_tyre_pressure: r.f32_le()?,
        front_left_tyre_pressure: r.f32_le()?,
        front_right_tyre_pressure: r.f32_le()?,
        ballast: r.u8()?,
        fuel_load: r.f32_le()?,
    })
}

pub fn parse(header: PacketHeader, payload: &[u8]) -> Result<PacketCarSetupData, DecodeError> {
    expect_len(PacketId::CarSetups, payload, PAYLOAD_SIZE)?;
    let mut r = ByteReader::new(payload);
    Ok(PacketCarSetupData {
        header,
        car_setups: r.records(parse_entry)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packets::testing::{PayloadWriter, header_for};

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn entry(w: &mut PayloadWriter, wing: u8) {
        w.u8(wing).u8(wing + 1).u8(60).u8(55);
        w.f32(-3.5).f32(-2.0).f32(0.05).f32(0.2);
        w.u8(41).u8(3).u8(10).u8(5).u8(3).u8(6).u8(100).u8(56);
        w.f32(22.5).f32(22.5).f32(25.0).f32(25.0);
        w.u8(6).f32(101.5);
    }

    #[test]
    fn parses_each_car_setup() -> TestResult {
        let mut w = PayloadWriter::new();
        for i in 0..22u8 {
            entry(&mut w, i);
        }
        assert_eq!(w.len(), PAYLOAD_SIZE);

        let p = parse(header_for(PacketId::CarSetups), &w.build())?;
        for (i, setup) in p.car_setups.iter().enumerate() {
            assert_eq!(usize::from(setup.front_wing), i);
            assert_eq!(usize::from(setup.rear_wing), i + 1);
            assert!((setup.front_camber + 3.5).abs() < f32::EPSILON);
            assert_eq!(setup.brake_bias, 56);
            assert!((setup.front_right_tyre_pressure - 25.0).abs() < f32::EPSILON);
            assert_eq!(setup.ballast, 6);
            assert!((setup.fuel_load - 101.5).abs() < f32::EPSILON);
        }
        Ok(())
    }

    #[test]
    fn short_payload_is_size_mismatch() {
        assert_eq!(
            parse(header_for(PacketId::CarSetups), &[0u8; PAYLOAD_SIZE - 1]),
            Err(DecodeError::SizeMismatch {
                kind: PacketId::CarSetups,
                expected: PAYLOAD_SIZE,
                actual: PAYLOAD_SIZE - 1,
            })
        );
    }
}
