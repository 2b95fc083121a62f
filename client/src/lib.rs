//! # Roster Client
//! Keeps a live roster of remote players from downstream `player_info` and
//! `player_remove` packets, and republishes what changed as ordered, awaited
//! update / join / leave notifications.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod shared {
    pub use roster_shared::{
        ChatSession, DownstreamPacket, GameProfile, PacketKind, PacketKindError, PlayerDelta,
        PlayerField, PlayerId, PlayerInfoActions, PlayerInfoPacket, PlayerRecord,
        PlayerRemovePacket, ProfileProperty,
    };
}

mod error;
mod events;
mod roster;
mod tracker;

pub use error::{HandlerError, HandlerResult, RosterError};
pub use events::{
    event_kind::EventKind,
    roster_events::{JoinHandler, LeaveHandler, RosterEvents, UpdateHandler},
};
pub use roster::{
    lifecycle::{classify, Lifecycle},
    merge::merge_delta,
    roster::{Players, Roster},
};
pub use tracker::{
    player_tracker::PlayerTracker,
    tracker_config::{HandlerErrorPolicy, TrackerConfig},
};
