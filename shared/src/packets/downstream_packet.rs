use std::fmt;

use crate::{PacketKindError, PlayerInfoPacket, PlayerRemovePacket};

/// Downstream packets the tracker subscribes to, keyed by the packet
/// source's subscription names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PacketKind {
    PlayerInfo,
    PlayerRemove,
}

impl PacketKind {
    pub const ALL: [PacketKind; 2] = [PacketKind::PlayerInfo, PacketKind::PlayerRemove];

    pub fn name(&self) -> &'static str {
        match self {
            Self::PlayerInfo => "player_info",
            Self::PlayerRemove => "player_remove",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, PacketKindError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| PacketKindError::UnknownPacket {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for PacketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DownstreamPacket {
    PlayerInfo(PlayerInfoPacket),
    PlayerRemove(PlayerRemovePacket),
}

impl DownstreamPacket {
    pub fn kind(&self) -> PacketKind {
        match self {
            Self::PlayerInfo(_) => PacketKind::PlayerInfo,
            Self::PlayerRemove(_) => PacketKind::PlayerRemove,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }
}

impl From<PlayerInfoPacket> for DownstreamPacket {
    fn from(packet: PlayerInfoPacket) -> Self {
        Self::PlayerInfo(packet)
    }
}

impl From<PlayerRemovePacket> for DownstreamPacket {
    fn from(packet: PlayerRemovePacket) -> Self {
        Self::PlayerRemove(packet)
    }
}
