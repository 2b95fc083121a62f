//! # Roster Shared
//! Player records, partial player updates and the decoded downstream packet
//! shapes consumed by the roster tracker.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod packets;
mod player;

pub use packets::{
    downstream_packet::{DownstreamPacket, PacketKind},
    error::PacketKindError,
    player_info_packet::{PlayerInfoActions, PlayerInfoPacket},
    player_remove_packet::PlayerRemovePacket,
};
pub use player::{
    game_profile::{ChatSession, GameProfile, ProfileProperty},
    player_delta::PlayerDelta,
    player_field::PlayerField,
    player_id::PlayerId,
    player_record::PlayerRecord,
};
