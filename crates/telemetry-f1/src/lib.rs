//! Decoder for the EA Sports **F1 23** UDP telemetry protocol.
//!
//! The game sends one little-endian binary packet per UDP datagram (port
//! **20777** by default). [`decode`] turns one datagram into a typed
//! [`Packet`] or a [`DecodeError`] naming the first structural problem. It
//! is a pure function: no I/O, no state kept between calls, safe to call
//! from any number of threads.
//!
//! # Protocol
//!
//! Every datagram starts with the 29-byte [`PacketHeader`]. Only packet
//! format `2023` is accepted; each kind has one exact payload length.
//!
//! | Id | Kind                 | Datagram bytes |
//! |----|----------------------|----------------|
//! | 0  | Motion               | 1349           |
//! | 1  | Session              | 644            |
//! | 2  | Lap Data             | 1131           |
//! | 3  | Event                | 45             |
//! | 4  | Participants         | 1306           |
//! | 5  | Car Setups           | 1107           |
//! | 6  | Car Telemetry        | 1352           |
//! | 7  | Car Status           | 1239           |
//! | 8  | Final Classification | 1020           |
//! | 9  | Lobby Info           | 1218           |
//! | 10 | Car Damage           | 953            |
//! | 11 | Session History      | 1460           |
//! | 12 | Tyre Sets            | 231            |
//! | 13 | Motion Ex            | 217            |
//!
//! Per-car arrays always hold 22 entries; the active count comes from the
//! Participants, Final Classification or Lobby Info packets.
//!
//! Advisory byte fields (weather, track, tyre compound, ...) decode into
//! enums from [`appendix`] that keep unknown values as `Unrecognized(raw)`.
//! An unknown event code, by contrast, is an error.
//!
//! # Usage
//!
//! ```rust,no_run
//! use f1_telemetry::{Packet, decode};
//!
//! # fn handle(datagram: &[u8]) -> Result<(), f1_telemetry::DecodeError> {
//! match decode(datagram)? {
//!     Packet::CarTelemetry(t) => {
//!         let player = usize::from(t.header.player_car_index);
//!         if let Some(car) = t.car_telemetry_data.get(player) {
//!             println!("{} km/h in gear {}", car.speed, car.gear);
//!         }
//!     }
//!     Packet::Event(e) => println!("event {}", e.code()),
//!     _ => {}
//! }
//! # Ok(())
//! # }
//! ```

#![deny(static_mut_refs)]

pub mod appendix;
pub mod error;
pub mod header;
pub mod packet;
pub mod packets;
pub mod reader;
pub mod registry;

pub use error::DecodeError;
pub use header::{HEADER_SIZE, PacketHeader, PacketId, parse_header};
pub use packet::{Packet, decode};
pub use packets::MAX_CARS;
pub use packets::event::{EventCode, EventDetail};
pub use registry::{PACKET_FORMAT_2023, PacketLayout, layouts, lookup};
