use std::fmt;

/// The three notifications the tracker publishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Update,
    Join,
    Leave,
}

impl EventKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Update => "player.update",
            Self::Join => "player.join",
            Self::Leave => "player.leave",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
