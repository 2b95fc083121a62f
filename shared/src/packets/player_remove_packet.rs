use crate::PlayerId;

/// Decoded `player_remove` packet: players the server no longer lists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerRemovePacket {
    pub players: Vec<PlayerId>,
}

impl PlayerRemovePacket {
    pub fn new<I, P>(players: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PlayerId>,
    {
        Self {
            players: players.into_iter().map(Into::into).collect(),
        }
    }
}
