pub mod game_profile;
pub mod player_delta;
pub mod player_field;
pub mod player_id;
pub mod player_record;
