use crate::{ChatSession, GameProfile, PlayerField, PlayerId};

/// A sparse patch for one player, as carried by a player info packet entry.
///
/// `None` means the packet conveyed no change for that field. There is no way
/// to express "clear this field": a delta can only set values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerDelta {
    pub uuid: PlayerId,
    pub player: Option<GameProfile>,
    pub chat_session: Option<ChatSession>,
    pub gamemode: Option<i32>,
    pub listed: Option<bool>,
    pub latency: Option<i32>,
    pub display_name: Option<String>,
}

impl PlayerDelta {
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

    pub fn with_player(mut self, player: GameProfile) -> Self {
        self.player = Some(player);
        self
    }

    pub fn with_chat_session(mut self, chat_session: ChatSession) -> Self {
        self.chat_session = Some(chat_session);
        self
    }

    pub fn with_gamemode(mut self, gamemode: i32) -> Self {
        self.gamemode = Some(gamemode);
        self
    }

    pub fn with_listed(mut self, listed: bool) -> Self {
        self.listed = Some(listed);
        self
    }

    pub fn with_latency(mut self, latency: i32) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn has(&self, field: PlayerField) -> bool {
        match field {
            PlayerField::Player => self.player.is_some(),
            PlayerField::ChatSession => self.chat_session.is_some(),
            PlayerField::Gamemode => self.gamemode.is_some(),
            PlayerField::Listed => self.listed.is_some(),
            PlayerField::Latency => self.latency.is_some(),
            PlayerField::DisplayName => self.display_name.is_some(),
        }
    }

    /// Fields this delta carries a value for.
    pub fn fields(&self) -> impl Iterator<Item = PlayerField> + '_ {
        PlayerField::ALL
            .into_iter()
            .filter(move |field| self.has(*field))
    }

    /// True when the delta names a player but conveys no field changes.
    pub fn is_empty(&self) -> bool {
        self.fields().next().is_none()
    }
}
