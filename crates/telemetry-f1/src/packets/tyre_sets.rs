//! Tyre sets packet (id 12): the tyre allocation of one car.

use serde::{Deserialize, Serialize};

use crate::appendix::{ActualTyreCompound, SessionType, VisualTyreCompound};
use crate::error::{DecodeError, expect_len};
use crate::header::{PacketHeader, PacketId};
use crate::reader::ByteReader;

/// 13 dry sets plus 7 wet sets.
pub const MAX_TYRE_SETS: usize = 20;

/// Size of one [`TyreSetData`] entry.
pub const ENTRY_SIZE: usize = 10;

/// Payload bytes after the header: car index, 20 sets, fitted index.
pub const PAYLOAD_SIZE: usize = 1 + MAX_TYRE_SETS * ENTRY_SIZE + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TyreSetData {
    pub actual_tyre_compound: ActualTyreCompound,
    pub visual_tyre_compound: VisualTyreCompound,
    /// Percent.
    pub wear: u8,
    pub available: bool,
    pub recommended_session: SessionType,
    /// Laps left in this set.
    pub life_span: u8,
    /// Maximum laps recommended for this compound.
    pub usable_life: u8,
    /// Milliseconds compared to the fitted set; negative is faster.
    pub lap_delta_time: i16,
    pub fitted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacketTyreSetsData {
    pub header: PacketHeader,
    pub car_idx: u8,
    pub tyre_set_data: [TyreSetData; MAX_TYRE_SETS],
    /// Index into `tyre_set_data` of the fitted set.
    pub fitted_idx: u8,
}

impl PacketTyreSetsData {
    pub fn fitted_set(&self) -> Option<&TyreSetData> {
        self.tyre_set_data.get(usize::from(self.fitted_idx))
    }
}

fn parse_entry(r: &mut ByteReader<'_>) -> Result<TyreSetData, DecodeError> {
    Ok(TyreSetData {
        actual_tyre_compound: r.u8()?.into(),
        visual_tyre_compound: r.u8()?.into(),
        wear: r.u8()?,
        available: r.flag()?,
        recommended_session: r.u8()?.into(),
        life_span: r.u8()?,
        usable_life: r.u8()?,
        lap_delta_time: r.i16_le()?,
        fitted: r.flag()?,
    })
}

pub fn parse(header: PacketHeader, payload: &[u8]) -> Result<PacketTyreSetsData, DecodeError> {
    expect_len(PacketId::TyreSets, payload, PAYLOAD_SIZE)?;
    let mut r = ByteReader::new(payload);
    Ok(PacketTyreSetsData {
        header,
        car_idx: r.u8()?,
        tyre_set_data: r.records(parse_entry)?,
        fitted_idx: r.u8()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packets::testing::{PayloadWriter, header_for};

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn payload(fitted_idx: u8) -> Vec<u8> {
        let mut w = PayloadWriter::new();
        w.u8(3);
        for i in 0..20u8 {
            let fitted = u8::from(i == fitted_idx);
            w.u8(16).u8(16).u8(i).u8(1).u8(10).u8(20).u8(25).i16(-350).u8(fitted);
        }
        w.u8(fitted_idx);
        w.build()
    }

    #[test]
    fn fixture_is_schema_length() {
        assert_eq!(payload(0).len(), PAYLOAD_SIZE);
        assert_eq!(PAYLOAD_SIZE, 202);
    }

    #[test]
    fn parses_sets_with_signed_delta() -> TestResult {
        let p = parse(header_for(PacketId::TyreSets), &payload(4))?;
        assert_eq!(p.car_idx, 3);
        for (i, set) in p.tyre_set_data.iter().enumerate() {
            assert_eq!(usize::from(set.wear), i);
            assert_eq!(set.actual_tyre_compound, ActualTyreCompound::C5);
            assert_eq!(set.visual_tyre_compound, VisualTyreCompound::Soft);
            assert!(set.available);
            assert_eq!(set.recommended_session, SessionType::Race);
            assert_eq!(set.lap_delta_time, -350);
            assert_eq!(set.fitted, i == 4);
        }
        let fitted = p.fitted_set().ok_or("no fitted set")?;
        assert_eq!(fitted.wear, 4);
        Ok(())
    }

    #[test]
    fn out_of_range_fitted_index_has_no_set() -> TestResult {
        let p = parse(header_for(PacketId::TyreSets), &payload(200))?;
        assert_eq!(p.fitted_set(), None);
        Ok(())
    }
}
