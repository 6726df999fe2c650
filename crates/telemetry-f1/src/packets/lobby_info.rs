//! Lobby info packet (id 9): players waiting in a multiplayer lobby.

use serde::{Deserialize, Serialize};

use super::{MAX_CARS, NAME_LEN};
use crate::appendix::{NationalityId, Platform, ReadyStatus, TeamId};
use crate::error::{DecodeError, expect_len};
use crate::header::{PacketHeader, PacketId};
use crate::reader::ByteReader;

/// Size of one [`LobbyInfoData`] entry.
pub const ENTRY_SIZE: usize = 54;

/// Payload bytes after the header: player count plus 22 entries.
pub const PAYLOAD_SIZE: usize = 1 + MAX_CARS * ENTRY_SIZE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LobbyInfoData {
    pub ai_controlled: bool,
    /// 255 when no team is selected yet.
    pub team_id: TeamId,
    pub nationality: NationalityId,
    pub platform: Platform,
    pub name: String,
    pub car_number: u8,
    pub ready_status: ReadyStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacketLobbyInfoData {
    pub header: PacketHeader,
    pub num_players: u8,
    pub lobby_players: [LobbyInfoData; MAX_CARS],
}

impl PacketLobbyInfoData {
    /// Entries covered by `num_players`.
    pub fn players(&self) -> &[LobbyInfoData] {
        let n = usize::from(self.num_players);
        self.lobby_players.get(..n).unwrap_or(&self.lobby_players)
    }
}

fn parse_entry(r: &mut ByteReader<'_>) -> Result<LobbyInfoData, DecodeError> {
    Ok(LobbyInfoData {
        ai_controlled: r.flag()?,
        team_id: TeamId(r.u8()?),
        nationality: NationalityId(r.u8()?),
        platform: r.u8()?.into(),
        name: r.fixed_str::<NAME_LEN>()?,
        car_number: r.u8()?,
        ready_status: r.u8()?.into(),
    })
}

pub fn parse(header: PacketHeader, payload: &[u8]) -> Result<PacketLobbyInfoData, DecodeError> {
    expect_len(PacketId::LobbyInfo, payload, PAYLOAD_SIZE)?;
    let mut r = ByteReader::new(payload);
    Ok(PacketLobbyInfoData {
        header,
        num_players: r.u8()?,
        lobby_players: r.records(parse_entry)?,
    })
}
