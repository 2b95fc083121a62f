use std::fmt;

/// The descriptive fields of a player, in merge order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayerField {
    Player,
    ChatSession,
    Gamemode,
    Listed,
    Latency,
    DisplayName,
}

impl PlayerField {
    pub const ALL: [PlayerField; 6] = [
        PlayerField::Player,
        PlayerField::ChatSession,
        PlayerField::Gamemode,
        PlayerField::Listed,
        PlayerField::Latency,
        PlayerField::DisplayName,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::ChatSession => "chatSession",
            Self::Gamemode => "gamemode",
            Self::Listed => "listed",
            Self::Latency => "latency",
            Self::DisplayName => "displayName",
        }
    }
}

impl fmt::Display for PlayerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
