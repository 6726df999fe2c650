//! Final classification packet (id 8), sent once at the end of a race.

use serde::{Deserialize, Serialize};

use super::MAX_CARS;
use crate::appendix::{ActualTyreCompound, ResultStatus, VisualTyreCompound};
use crate::error::{DecodeError, expect_len};
use crate::header::{PacketHeader, PacketId};
use crate::reader::ByteReader;

/// Size of one [`FinalClassificationData`] entry.
pub const ENTRY_SIZE: usize = 45;

/// Payload bytes after the header: car count plus 22 entries.
pub const PAYLOAD_SIZE: usize = 1 + MAX_CARS * ENTRY_SIZE;

/// Stint slots per car.
pub const MAX_TYRE_STINTS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinalClassificationData {
    pub position: u8,
    pub num_laps: u8,
    pub grid_position: u8,
    pub points: u8,
    pub num_pit_stops: u8,
    pub result_status: ResultStatus,
    pub best_lap_time_in_ms: u32,
    /// Seconds, without penalties.
    pub total_race_time: f64,
    /// Seconds.
    pub penalties_time: u8,
    pub num_penalties: u8,
    pub num_tyre_stints: u8,
    pub tyre_stints_actual: [ActualTyreCompound; MAX_TYRE_STINTS],
    pub tyre_stints_visual: [VisualTyreCompound; MAX_TYRE_STINTS],
    /// Lap each stint ended on.
    pub tyre_stints_end_laps: [u8; MAX_TYRE_STINTS],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacketFinalClassificationData {
    pub header: PacketHeader,
    pub num_cars: u8,
    pub classification_data: [FinalClassificationData; MAX_CARS],
}

fn parse_entry(r: &mut ByteReader<'_>) -> Result<FinalClassificationData, DecodeError> {
    Ok(FinalClassificationData {
        position: r.u8()?,
        num_laps: r.u8()?,
        grid_position: r.u8()?,
        points: r.u8()?,
        num_pit_stops: r.u8()?,
        result_status: r.u8()?.into(),
        best_lap_time_in_ms: r.u32_le()?,
        total_race_time: r.f64_le()?,
        penalties_time: r.u8()?,
        num_penalties: r.u8()?,
        num_tyre_stints: r.u8()?,
        tyre_stints_actual: r.u8_array::<MAX_TYRE_STINTS>()?.map(ActualTyreCompound::from),
        tyre_stints_visual: r.u8_array::<MAX_TYRE_STINTS>()?.map(VisualTyreCompound::from),
        tyre_stints_end_laps: r.u8_array()?,
    })
}

pub fn parse(
    header: PacketHeader,
    payload: &[u8],
) -> Result<PacketFinalClassificationData, DecodeError> {
    expect_len(PacketId::FinalClassification, payload, PAYLOAD_SIZE)?;
    let mut r = ByteReader::new(payload);
    Ok(PacketFinalClassificationData {
        header,
        num_cars: r.u8()?,
        classification_data: r.records(parse_entry)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packets::testing::{PayloadWriter, header_for};

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn entry(w: &mut PayloadWriter, position: u8) {
        w.u8(position).u8(57).u8(position).u8(25).u8(1).u8(3);
        w.u32(91_234).f64(5_432.125);
        w.u8(5).u8(1).u8(2);
        w.bytes(&[18, 17, 0, 0, 0, 0, 0, 0]);
        w.bytes(&[17, 18, 0, 0, 0, 0, 0, 0]);
        w.bytes(&[22, 57, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn parses_classification() -> TestResult {
        let mut w = PayloadWriter::new();
        w.u8(20);
        for i in 1..=22u8 {
            entry(&mut w, i);
        }
        assert_eq!(w.len(), PAYLOAD_SIZE);
        assert_eq!(PAYLOAD_SIZE, 991);

        let p = parse(header_for(PacketId::FinalClassification), &w.build())?;
        assert_eq!(p.num_cars, 20);
        let winner = p.classification_data.first().ok_or("no cars")?;
        assert_eq!(winner.position, 1);
        assert_eq!(winner.result_status, ResultStatus::Finished);
        assert_eq!(winner.best_lap_time_in_ms, 91_234);
        assert!((winner.total_race_time - 5_432.125).abs() < f64::EPSILON);
        assert_eq!(winner.num_tyre_stints, 2);
        assert_eq!(
            winner.tyre_stints_actual.get(..2),
            Some(&[ActualTyreCompound::C3, ActualTyreCompound::C4][..])
        );
        assert_eq!(winner.tyre_stints_visual.first(), Some(&VisualTyreCompound::Medium));
        assert_eq!(winner.tyre_stints_end_laps.get(..2), Some(&[22, 57][..]));
        let last = p.classification_data.last().ok_or("no cars")?;
        assert_eq!(last.position, 22);
        Ok(())
    }
}
