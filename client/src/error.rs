use thiserror::Error;

use roster_shared::PlayerId;

use crate::EventKind;

/// Error a notification handler may return.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

pub type HandlerResult = Result<(), HandlerError>;

/// Errors surfaced while feeding packets into the tracker
///
/// The tracker itself never rejects packet data. The only failure is a
/// subscribed handler failing, which is passed through to the caller that
/// delivered the packet.
#[derive(Debug, Error)]
pub enum RosterError {
    /// A subscribed handler returned an error while being notified
    #[error("{kind} handler failed for player {player}")]
    HandlerFailed {
        kind: EventKind,
        player: PlayerId,
        source: HandlerError,
    },
}

impl RosterError {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::HandlerFailed { kind, .. } => *kind,
        }
    }

    pub fn player(&self) -> &PlayerId {
        match self {
            Self::HandlerFailed { player, .. } => player,
        }
    }
}
