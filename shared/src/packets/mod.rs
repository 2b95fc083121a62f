pub mod downstream_packet;
pub mod error;
pub mod player_info_packet;
pub mod player_remove_packet;
