use roster_shared::{PlayerDelta, PlayerRecord};

/// Folds `delta` into `player`: every field the delta carries overwrites the
/// record's value, every field it omits is left alone.
///
/// Fields are replaced whole (a new profile replaces the old one, properties
/// included). The delta cannot clear a field.
pub fn merge_delta(player: &mut PlayerRecord, delta: &PlayerDelta) {
    merge_field(&mut player.player, &delta.player);
    merge_field(&mut player.chat_session, &delta.chat_session);
    merge_field(&mut player.gamemode, &delta.gamemode);
    merge_field(&mut player.listed, &delta.listed);
    merge_field(&mut player.latency, &delta.latency);
    merge_field(&mut player.display_name, &delta.display_name);
}

fn merge_field<T: Clone>(target: &mut Option<T>, patch: &Option<T>) {
    if let Some(value) = patch {
        *target = Some(value.clone());
    }
}
