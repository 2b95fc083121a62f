use crate::Roster;

/// What an incoming delta means for its player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// The player was not in the roster before this delta.
    Join,
    /// The player was already known.
    Update,
}

impl Lifecycle {
    pub fn is_join(&self) -> bool {
        *self == Lifecycle::Join
    }
}

/// Classifies a delta for `uuid` by roster membership. Must be called before
/// the delta is merged.
///
/// The packet's `ADD_PLAYER` action bit is deliberately not consulted: the
/// server also sets it on latency refreshes of players it already listed.
pub fn classify(roster: &Roster, uuid: &str) -> Lifecycle {
    if roster.contains(uuid) {
        Lifecycle::Update
    } else {
        Lifecycle::Join
    }
}
