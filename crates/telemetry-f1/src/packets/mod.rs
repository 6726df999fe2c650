//! Per-kind payload decoders.
//!
//! Each module decodes one packet kind from the bytes that follow the header.
//! Decoders check the exact payload length first and then read fields in
//! wire order through a [`ByteReader`](crate::reader::ByteReader).

pub mod car_damage;
pub mod car_setups;
pub mod car_status;
pub mod car_telemetry;
pub mod event;
pub mod final_classification;
pub mod lap_data;
pub mod lobby_info;
pub mod motion;
pub mod motion_ex;
pub mod participants;
pub mod session;
pub mod session_history;
pub mod tyre_sets;

/// Length of every per-car array, regardless of how many cars are active.
pub const MAX_CARS: usize = 22;

/// Byte width of the fixed name fields in Participants and LobbyInfo.
pub const NAME_LEN: usize = 48;
