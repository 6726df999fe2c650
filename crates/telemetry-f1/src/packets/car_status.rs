//! Car status packet (id 7): fuel, ERS, tyres and assists per car.

use serde::{Deserialize, Serialize};

use super::MAX_CARS;
use crate::appendix::{
    ActualTyreCompound, ErsDeployMode, FiaFlag, FuelMix, TractionControl, VisualTyreCompound,
};
use crate::error::{DecodeError, expect_len};
use crate::header::{PacketHeader, PacketId};
use crate::reader::ByteReader;

/// Size of one [`CarStatusData`] entry.
pub const ENTRY_SIZE: usize = 55;

/// Payload bytes after the header.
pub const PAYLOAD_SIZE: usize = MAX_CARS * ENTRY_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarStatusData {
    pub traction_control: TractionControl,
    pub anti_lock_brakes: bool,
    pub fuel_mix: FuelMix,
    /// Percent.
    pub front_brake_bias: u8,
    pub pit_limiter_status: bool,
    /// Kilograms.
    pub fuel_in_tank: f32,
    pub fuel_capacity: f32,
    /// Value shown on the MFD.
    pub fuel_remaining_laps: f32,
    pub max_rpm: u16,
    pub idle_rpm: u16,
    pub max_gears: u8,
    pub drs_allowed: bool,
    /// Metres until DRS becomes available; 0 when not available.
    pub drs_activation_distance: u16,
    pub actual_tyre_compound: ActualTyreCompound,
    pub visual_tyre_compound: VisualTyreCompound,
    pub tyres_age_laps: u8,
    pub vehicle_fia_flags: FiaFlag,
    /// Watts.
    pub engine_power_ice: f32,
    pub engine_power_mguk: f32,
    /// Joules.
    pub ers_store_energy: f32,
    pub ers_deploy_mode: ErsDeployMode,
    pub ers_harvested_this_lap_mguk: f32,
    pub ers_harvested_this_lap_mguh: f32,
    pub ers_deployed_this_lap: f32,
    pub network_paused: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacketCarStatusData {
    pub header: PacketHeader,
    pub car_status_data: [CarStatusData; MAX_CARS],
}

fn parse_entry(r: &mut ByteReader<'_>) -> Result<CarStatusData, DecodeError> {
    Ok(CarStatusData {
        traction_control: r.u8()?.into(),
        anti_lock_brakes: r.flag()?,
        fuel_mix: r.u8()?.into(),
        front_brake_bias: r.u8()?,
        pit_limiter_status: r.flag()?,
        fuel_in_tank: r.f32_le()?,
        fuel_capacity: r.f32_le()?,
        fuel_remaining_laps: r.f32_le()?,
        max_rpm: r.u16_le()?,
        idle_rpm: r.u16_le()?,
        max_gears: r.u8()?,
        drs_allowed: r.flag()?,
        drs_activation_distance: r.u16_le()?,
        actual_tyre_compound: r.u8()?.into(),
        visual_tyre_compound: r.u8()?.into(),
        tyres_age_laps: r.u8()?,
        vehicle_fia_flags: r.i8()?.into(),
        engine_power_ice: r.f32_le()?,
        engine_power_mguk: r.f32_le()?,
        ers_store_energy: r.f32_le()?,
        ers_deploy_mode: r.u8()?.into(),
        ers_harvested_this_lap_mguk: r.f32_le()?,
        ers_harvested_this_lap_mguh: r.f32_le()?,
        ers_deployed_this_lap: r.f32_le()?,
        network_paused: r.flag()?,
    })
}

pub fn parse(header: PacketHeader, payload: &[u8]) -> Result<PacketCarStatusData, DecodeError> {
    expect_len(PacketId::CarStatus, payload, PAYLOAD_SIZE)?;
    let mut r = ByteReader::new(payload);
    Ok(PacketCarStatusData {
        header,
        car_status_data: r.records(parse_entry)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packets::testing::{PayloadWriter, header_for};

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn entry(w: &mut PayloadWriter, fuel: f32) {
        w.u8(2).u8(1).u8(3).u8(57).u8(0);
        w.f32(fuel).f32(110.0).f32(12.5);
        w.u16(13_000).u16(4_000).u8(8).u8(1).u16(0);
        w.u8(18).u8(17).u8(4).i8(2);
        w.f32(560_000.0).f32(120_000.0).f32(4_000_000.0);
        w.u8(3);
        w.f32(100.0).f32(200.0).f32(300.0);
        w.u8(0);
    }

    #[test]
    fn entry_stride_matches_wire_layout() {
        let mut w = PayloadWriter::new();
        entry(&mut w, 0.0);
        assert_eq!(w.len(), ENTRY_SIZE);
        assert_eq!(PAYLOAD_SIZE, 1210);
    }

    #[test]
    fn parses_status_for_each_car() -> TestResult {
        let mut w = PayloadWriter::new();
        for i in 0..22u8 {
            entry(&mut w, f32::from(i) * 2.0);
        }
        let p = parse(header_for(PacketId::CarStatus), &w.build())?;
        for (i, car) in p.car_status_data.iter().enumerate() {
            let expected_fuel = f32::from(u8::try_from(i)?) * 2.0;
            assert!((car.fuel_in_tank - expected_fuel).abs() < f32::EPSILON);
            assert_eq!(car.traction_control, TractionControl::Full);
            assert!(car.anti_lock_brakes);
            assert_eq!(car.fuel_mix, FuelMix::Max);
            assert!(!car.pit_limiter_status);
            assert_eq!(car.max_rpm, 13_000);
            assert!(car.drs_allowed);
            assert_eq!(car.actual_tyre_compound, ActualTyreCompound::C3);
            assert_eq!(car.visual_tyre_compound, VisualTyreCompound::Medium);
            assert_eq!(car.vehicle_fia_flags, FiaFlag::Blue);
            assert!((car.engine_power_ice - 560_000.0).abs() < f32::EPSILON);
            assert_eq!(car.ers_deploy_mode, ErsDeployMode::Overtake);
            assert!((car.ers_deployed_this_lap - 300.0).abs() < f32::EPSILON);
            assert!(!car.network_paused);
        }
        Ok(())
    }

    #[test]
    fn nan_floats_pass_through_unchanged() -> TestResult {
        let mut w = PayloadWriter::new();
        w.zeros(5).u32(0x7FC0_1234);
        w.zeros(PAYLOAD_SIZE - w.len());
        let p = parse(header_for(PacketId::CarStatus), &w.build())?;
        let first = p.car_status_data.first().ok_or("no cars")?;
        assert_eq!(first.fuel_in_tank.to_bits(), 0x7FC0_1234);
        Ok(())
    }
}
