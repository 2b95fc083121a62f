use crate::{ChatSession, GameProfile, PlayerId};

/// Everything currently known about one tracked player.
///
/// Only `uuid` is guaranteed. Every other field is `None` until some delta
/// supplies it, and `None` means "unknown", not "cleared".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerRecord {
    pub uuid: PlayerId,
    pub player: Option<GameProfile>,
    pub chat_session: Option<ChatSession>,
    pub gamemode: Option<i32>,
    pub listed: Option<bool>,
    pub latency: Option<i32>,
    pub display_name: Option<String>,
}

impl PlayerRecord {
    /// A record with nothing known besides its key.
    pub fn new(uuid: impl Into<PlayerId>) -> Self {
        Self {
            uuid: uuid.into(),
            player: None,
            chat_session: None,
            gamemode: None,
            listed: None,
            latency: None,
            display_name: None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.player.as_ref().map(|profile| profile.name.as_str())
    }
}
