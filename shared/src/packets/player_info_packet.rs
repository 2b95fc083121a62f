use bitflags::bitflags;

use crate::PlayerDelta;

bitflags! {
    /// Action bitmask of a player info packet.
    ///
    /// Tells which sections each entry carries. `ADD_PLAYER` is also set on plain
    /// latency refreshes for players that are already known, so it cannot be used
    /// to tell joins apart from updates.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct PlayerInfoActions: u8 {
        const ADD_PLAYER          = 0x01;
        const INITIALIZE_CHAT     = 0x02;
        const UPDATE_GAME_MODE    = 0x04;
        const UPDATE_LISTED       = 0x08;
        const UPDATE_LATENCY      = 0x10;
        const UPDATE_DISPLAY_NAME = 0x20;
    }
}

/// Decoded `player_info` packet: one delta per affected player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerInfoPacket {
    pub action: PlayerInfoActions,
    pub data: Vec<PlayerDelta>,
}

impl PlayerInfoPacket {
    pub fn new(action: PlayerInfoActions, data: Vec<PlayerDelta>) -> Self {
        Self { action, data }
    }
}
