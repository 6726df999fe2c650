//! Session packet (id 1): track, weather, rules and assists.

use serde::{Deserialize, Serialize};

use crate::appendix::{
    BrakingAssist, DynamicRacingLine, DynamicRacingLineType, FiaFlag, ForecastAccuracy, Formula,
    GameMode, GearboxAssist, RuleSet, SafetyCarStatus, SessionLength, SessionType, SpeedUnit,
    TemperatureChange, TemperatureUnit, Track, Weather,
};
use crate::error::{DecodeError, expect_len};
use crate::header::{PacketHeader, PacketId};
use crate::reader::ByteReader;

/// Payload bytes after the header.
pub const PAYLOAD_SIZE: usize = 615;

/// Fixed number of marshal zone slots.
pub const MAX_MARSHAL_ZONES: usize = 21;

/// Fixed number of weather forecast slots.
pub const MAX_WEATHER_FORECAST_SAMPLES: usize = 56;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarshalZone {
    /// Fraction (0..1) of the lap where the zone starts.
    pub zone_start: f32,
    pub zone_flag: FiaFlag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherForecastSample {
    pub session_type: SessionType,
    /// Minutes into the future.
    pub time_offset: u8,
    pub weather: Weather,
    pub track_temperature: i8,
    pub track_temperature_change: TemperatureChange,
    pub air_temperature: i8,
    pub air_temperature_change: TemperatureChange,
    pub rain_percentage: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacketSessionData {
    pub header: PacketHeader,
    pub weather: Weather,
    /// Degrees Celsius.
    pub track_temperature: i8,
    pub air_temperature: i8,
    pub total_laps: u8,
    /// Metres.
    pub track_length: u16,
    pub session_type: SessionType,
    pub track_id: Track,
    pub formula: Formula,
    /// Seconds.
    pub session_time_left: u16,
    pub session_duration: u16,
    /// km/h.
    pub pit_speed_limit: u8,
    pub game_paused: bool,
    pub is_spectating: bool,
    pub spectator_car_index: u8,
    pub sli_pro_native_support: bool,
    pub num_marshal_zones: u8,
    pub marshal_zones: [MarshalZone; MAX_MARSHAL_ZONES],
    pub safety_car_status: SafetyCarStatus,
    pub network_game: bool,
    pub num_weather_forecast_samples: u8,
    /// Always [`MAX_WEATHER_FORECAST_SAMPLES`] long; only the first
    /// `num_weather_forecast_samples` are meaningful.
    pub weather_forecast_samples: Vec<WeatherForecastSample>,
    pub forecast_accuracy: ForecastAccuracy,
    /// 0 to 110.
    pub ai_difficulty: u8,
    pub season_link_identifier: u32,
    pub weekend_link_identifier: u32,
    pub session_link_identifier: u32,
    pub pit_stop_window_ideal_lap: u8,
    pub pit_stop_window_latest_lap: u8,
    pub pit_stop_rejoin_position: u8,
    pub steering_assist: bool,
    pub braking_assist: BrakingAssist,
    pub gearbox_assist: GearboxAssist,
    pub pit_assist: bool,
    pub pit_release_assist: bool,
    pub ers_assist: bool,
    pub drs_assist: bool,
    pub dynamic_racing_line: DynamicRacingLine,
    pub dynamic_racing_line_type: DynamicRacingLineType,
    pub game_mode: GameMode,
    pub rule_set: RuleSet,
    /// Minutes since midnight.
    pub time_of_day: u32,
    pub session_length: SessionLength,
    pub speed_units_lead_player: SpeedUnit,
    pub temperature_units_lead_player: TemperatureUnit,
    pub speed_units_secondary_player: SpeedUnit,
    pub temperature_units_secondary_player: TemperatureUnit,
    pub num_safety_car_periods: u8,
    pub num_virtual_safety_car_periods: u8,
    pub num_red_flag_periods: u8,
}

impl PacketSessionData {
    /// Forecast samples the game marked as valid.
    pub fn active_forecasts(&self) -> &[WeatherForecastSample] {
        let n = usize::from(self.num_weather_forecast_samples);
        self.weather_forecast_samples
            .get(..n)
            .unwrap_or(&self.weather_forecast_samples)
    }

    /// Marshal zones the game marked as valid.
    pub fn active_marshal_zones(&self) -> &[MarshalZone] {
        let n = usize::from(self.num_marshal_zones);
        self.marshal_zones.get(..n).unwrap_or(&self.marshal_zones)
    }
}

fn parse_marshal_zone(r: &mut ByteReader<'_>) -> Result<MarshalZone, DecodeError> {
    Ok(MarshalZone {
        zone_start: r.f32_le()?,
        zone_flag: r.i8()?.into(),
    })
}

fn parse_forecast(r: &mut ByteReader<'_>) -> Result<WeatherForecastSample, DecodeError> {
    Ok(WeatherForecastSample {
        session_type: r.u8()?.into(),
        time_offset: r.u8()?,
        weather: r.u8()?.into(),
        track_temperature: r.i8()?,
        track_temperature_change: r.i8()?.into(),
        air_temperature: r.i8()?,
        air_temperature_change: r.i8()?.into(),
        rain_percentage: r.u8()?,
    })
}

pub fn parse(header: PacketHeader, payload: &[u8]) -> Result<PacketSessionData, DecodeError> {
    expect_len(PacketId::Session, payload, PAYLOAD_SIZE)?;
    let mut r = ByteReader::new(payload);
    Ok(PacketSessionData {
        header,
        weather: r.u8()?.into(),
        track_temperature: r.i8()?,
        air_temperature: r.i8()?,
        total_laps: r.u8()?,
        track_length: r.u16_le()?,
        session_type: r.u8()?.into(),
        track_id: r.i8()?.into(),
        formula: r.u8()?.into(),
        session_time_left: r.u16_le()?,
        session_duration: r.u16_le()?,
        pit_speed_limit: r.u8()?,
        game_paused: r.flag()?,
        is_spectating: r.flag()?,
        spectator_car_index: r.u8()?,
        sli_pro_native_support: r.flag()?,
        num_marshal_zones: r.u8()?,
        marshal_zones: r.records(parse_marshal_zone)?,
        safety_car_status: r.u8()?.into(),
        network_game: r.flag()?,
        num_weather_forecast_samples: r.u8()?,
        weather_forecast_samples: r.record_vec(MAX_WEATHER_FORECAST_SAMPLES, parse_forecast)?,
        forecast_accuracy: r.u8()?.into(),
        ai_difficulty: r.u8()?,
        season_link_identifier: r.u32_le()?,
        weekend_link_identifier: r.u32_le()?,
        session_link_identifier: r.u32_le()?,
        pit_stop_window_ideal_lap: r.u8()?,
        pit_stop_window_latest_lap: r.u8()?,
        pit_stop_rejoin_position: r.u8()?,
        steering_assist: r.flag()?,
        braking_assist: r.u8()?.into(),
        gearbox_assist: r.u8()?.into(),
        pit_assist: r.flag()?,
        pit_release_assist: r.flag()?,
        ers_assist: r.flag()?,
        drs_assist: r.flag()?,
        dynamic_racing_line: r.u8()?.into(),
        dynamic_racing_line_type: r.u8()?.into(),
        game_mode: r.u8()?.into(),
        rule_set: r.u8()?.into(),
        time_of_day: r.u32_le()?,
        session_length: r.u8()?.into(),
        speed_units_lead_player: r.u8()?.into(),
        temperature_units_lead_player: r.u8()?.into(),
        speed_units_secondary_player: r.u8()?.into(),
        temperature_units_secondary_player: r.u8()?.into(),
        num_safety_car_periods: r.u8()?,
        num_virtual_safety_car_periods: r.u8()?,
        num_red_flag_periods: r.u8()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packets::testing::{PayloadWriter, header_for};

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn payload() -> Vec<u8> {
        let mut w = PayloadWriter::new();
        // weather .. track length
        w.u8(3).i8(31).i8(24).u8(57).u16(5793);
        // session type, track, formula
        w.u8(10).i8(11).u8(0);
        w.u16(3600).u16(7200);
        // pit limit, paused, spectating, spectator idx, sli pro, zones
        w.u8(80).u8(0).u8(1).u8(4).u8(0).u8(2);
        w.f32(0.25).i8(3);
        w.f32(0.75).i8(-1);
        for _ in 2..MAX_MARSHAL_ZONES {
            w.f32(0.0).i8(0);
        }
        // safety car, network, forecast count
        w.u8(2).u8(1).u8(1);
        w.u8(10).u8(15).u8(4).i8(28).i8(1).i8(21).i8(2).u8(80);
        w.zeros(8 * (MAX_WEATHER_FORECAST_SAMPLES - 1));
        w.u8(1).u8(95);
        w.u32(111).u32(222).u32(333);
        w.u8(18).u8(24).u8(9);
        // steering .. rule set
        w.u8(1).u8(2).u8(3).u8(0).u8(1).u8(0).u8(1).u8(2).u8(1).u8(21).u8(1);
        w.u32(840);
        w.u8(7).u8(1).u8(0).u8(0).u8(1);
        w.u8(1).u8(2).u8(0);
        w.build()
    }

    #[test]
    fn fixture_is_schema_length() {
        assert_eq!(payload().len(), PAYLOAD_SIZE);
    }

    #[test]
    fn parses_scalar_fields_at_their_offsets() -> TestResult {
        let s = parse(header_for(PacketId::Session), &payload())?;
        assert_eq!(s.weather, Weather::LightRain);
        assert_eq!(s.track_temperature, 31);
        assert_eq!(s.total_laps, 57);
        assert_eq!(s.track_length, 5793);
        assert_eq!(s.session_type, SessionType::Race);
        assert_eq!(s.track_id, Track::Monza);
        assert_eq!(s.formula, Formula::F1Modern);
        assert_eq!(s.session_duration, 7200);
        assert!(!s.game_paused);
        assert!(s.is_spectating);
        assert_eq!(s.spectator_car_index, 4);
        assert_eq!(s.safety_car_status, SafetyCarStatus::Virtual);
        assert!(s.network_game);
        assert_eq!(s.forecast_accuracy, ForecastAccuracy::Approximate);
        assert_eq!(s.ai_difficulty, 95);
        assert_eq!(s.session_link_identifier, 333);
        assert_eq!(s.pit_stop_rejoin_position, 9);
        assert!(s.steering_assist);
        assert_eq!(s.braking_assist, BrakingAssist::Medium);
        assert_eq!(s.gearbox_assist, GearboxAssist::Automatic);
        assert_eq!(s.dynamic_racing_line, DynamicRacingLine::Full);
        assert_eq!(s.game_mode, GameMode::Career23);
        assert_eq!(s.rule_set, RuleSet::Race);
        assert_eq!(s.time_of_day, 840);
        assert_eq!(s.session_length, SessionLength::Full);
        assert_eq!(s.speed_units_lead_player, SpeedUnit::Kph);
        assert_eq!(s.temperature_units_secondary_player, TemperatureUnit::Fahrenheit);
        assert_eq!(s.num_safety_car_periods, 1);
        assert_eq!(s.num_virtual_safety_car_periods, 2);
        assert_eq!(s.num_red_flag_periods, 0);
        Ok(())
    }

    #[test]
    fn nested_arrays_decode_with_counts() -> TestResult {
        let s = parse(header_for(PacketId::Session), &payload())?;
        assert_eq!(s.weather_forecast_samples.len(), MAX_WEATHER_FORECAST_SAMPLES);

        let zones = s.active_marshal_zones();
        assert_eq!(zones.len(), 2);
        assert_eq!(zones.first().map(|z| z.zone_flag), Some(FiaFlag::Yellow));
        assert_eq!(zones.get(1).map(|z| z.zone_flag), Some(FiaFlag::Unknown));

        let forecasts = s.active_forecasts();
        assert_eq!(forecasts.len(), 1);
        let f = forecasts.first().ok_or("missing forecast")?;
        assert_eq!(f.time_offset, 15);
        assert_eq!(f.weather, Weather::HeavyRain);
        assert_eq!(f.track_temperature_change, TemperatureChange::Down);
        assert_eq!(f.air_temperature_change, TemperatureChange::NoChange);
        assert_eq!(f.rain_percentage, 80);
        Ok(())
    }

    #[test]
    fn unknown_advisory_values_are_kept() -> TestResult {
        let mut raw = payload();
        if let Some(b) = raw.get_mut(0) {
            *b = 42;
        }
        if let Some(b) = raw.get_mut(7) {
            *b = 99;
        }
        let s = parse(header_for(PacketId::Session), &raw)?;
        assert_eq!(s.weather, Weather::Unrecognized(42));
        assert_eq!(s.track_id, Track::Unrecognized(99));
        Ok(())
    }

    #[test]
    fn oversized_forecast_count_is_clamped_by_accessor() -> TestResult {
        let mut raw = payload();
        // num_weather_forecast_samples sits after 21 zones and two flag bytes
        if let Some(b) = raw.get_mut(126) {
            *b = 200;
        }
        let s = parse(header_for(PacketId::Session), &raw)?;
        assert_eq!(s.active_forecasts().len(), MAX_WEATHER_FORECAST_SAMPLES);
        Ok(())
    }
}
