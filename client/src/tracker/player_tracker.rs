use futures::future::LocalBoxFuture;
use log::{debug, info, trace};

use roster_shared::{
    DownstreamPacket, PacketKind, PlayerDelta, PlayerField, PlayerId, PlayerInfoActions,
    PlayerInfoPacket, PlayerRecord, PlayerRemovePacket,
};

use crate::{
    classify, merge_delta, HandlerResult, Lifecycle, Players, Roster, RosterError, RosterEvents,
    TrackerConfig,
};

/// Tracks the players a downstream server lists and notifies subscribers as
/// they join, change and leave.
///
/// Feed it the `player_info` and `player_remove` packets of one downstream
/// connection, one packet at a time and in arrival order. Each `handle_*` call
/// takes `&mut self`, so packets cannot interleave.
pub struct PlayerTracker {
    roster: Roster,
    events: RosterEvents,
}

impl PlayerTracker {
    /// Packets the tracker needs to be subscribed to on the packet source.
    pub const SUBSCRIPTIONS: [PacketKind; 2] = PacketKind::ALL;

    pub fn new(config: TrackerConfig) -> Self {
        Self {
            roster: Roster::with_capacity(config.initial_capacity),
            events: RosterEvents::new(config.handler_error_policy),
        }
    }

    // Roster queries

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn player(&self, uuid: &str) -> Option<&PlayerRecord> {
        self.roster.get(uuid)
    }

    pub fn players(&self) -> Players<'_> {
        self.roster.iter()
    }

    pub fn player_list(&self) -> Vec<&PlayerRecord> {
        self.roster.to_vec()
    }

    pub fn contains(&self, uuid: &str) -> bool {
        self.roster.contains(uuid)
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    // Subscription

    pub fn events(&self) -> &RosterEvents {
        &self.events
    }

    pub fn on_update<F>(&mut self, handler: F)
    where
        F: 'static + for<'a> Fn(&'a PlayerRecord, &'a PlayerDelta) -> LocalBoxFuture<'a, HandlerResult>,
    {
        self.events.on_update(handler);
    }

    pub fn on_join<F>(&mut self, handler: F)
    where
        F: 'static + for<'a> Fn(&'a PlayerRecord) -> LocalBoxFuture<'a, HandlerResult>,
    {
        self.events.on_join(handler);
    }

    pub fn on_leave<F>(&mut self, handler: F)
    where
        F: 'static + for<'a> Fn(&'a PlayerId, &'a Roster) -> LocalBoxFuture<'a, HandlerResult>,
    {
        self.events.on_leave(handler);
    }

    // Packet handling

    pub async fn handle_packet(&mut self, packet: &DownstreamPacket) -> Result<(), RosterError> {
        match packet {
            DownstreamPacket::PlayerInfo(packet) => self.handle_player_info(packet).await,
            DownstreamPacket::PlayerRemove(packet) => self.handle_player_remove(packet).await,
        }
    }

    /// Merges every entry of a `player_info` packet into the roster, in order.
    ///
    /// For each entry: merge, then notify update, then notify join if the
    /// player was not in the roster before this entry.
    pub async fn handle_player_info(
        &mut self,
        packet: &PlayerInfoPacket,
    ) -> Result<(), RosterError> {
        debug!(
            "{}: actions {:?}, {} entries",
            PacketKind::PlayerInfo,
            packet.action,
            packet.data.len()
        );

        for delta in &packet.data {
            let lifecycle = classify(&self.roster, delta.uuid.as_str());
            if lifecycle == Lifecycle::Update
                && packet.action.contains(PlayerInfoActions::ADD_PLAYER)
            {
                debug!("ADD_PLAYER set for known player {}, treating as update", delta.uuid);
            }

            let player = self
                .roster
                .upsert(&delta.uuid, |player| merge_delta(player, delta));
            trace!(
                "merged {:?} into player {}",
                delta.fields().map(|field: PlayerField| field.name()).collect::<Vec<_>>(),
                delta.uuid
            );

            self.events.emit_update(player, delta).await?;

            if lifecycle.is_join() {
                info!("player {} joined", delta.uuid);
                self.events.emit_join(player).await?;
            }
        }

        Ok(())
    }

    /// Notifies leave for every player of a `player_remove` packet, then drops
    /// it from the roster. Leave handlers still see the player in the roster.
    pub async fn handle_player_remove(
        &mut self,
        packet: &PlayerRemovePacket,
    ) -> Result<(), RosterError> {
        debug!("{}: {} entries", PacketKind::PlayerRemove, packet.players.len());

        for uuid in &packet.players {
            self.events.emit_leave(uuid, &self.roster).await?;

            if self.roster.remove(uuid.as_str()).is_some() {
                info!("player {} left", uuid);
            } else {
                debug!("removed player {} was never listed", uuid);
            }
        }

        Ok(())
    }
}

impl Default for PlayerTracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}
