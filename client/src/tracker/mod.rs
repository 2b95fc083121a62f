pub mod player_tracker;
pub mod tracker_config;
