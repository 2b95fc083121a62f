use futures::future::LocalBoxFuture;
use log::warn;

use roster_shared::{PlayerDelta, PlayerId, PlayerRecord};

use crate::{EventKind, HandlerErrorPolicy, HandlerResult, Roster, RosterError};

/// Called after every merged delta with the post-merge record and the raw delta.
pub type UpdateHandler =
    Box<dyn for<'a> Fn(&'a PlayerRecord, &'a PlayerDelta) -> LocalBoxFuture<'a, HandlerResult>>;

/// Called once when a player first appears, right after its update notification.
pub type JoinHandler = Box<dyn for<'a> Fn(&'a PlayerRecord) -> LocalBoxFuture<'a, HandlerResult>>;

/// Called for every removed player while it is still in the roster.
pub type LeaveHandler =
    Box<dyn for<'a> Fn(&'a PlayerId, &'a Roster) -> LocalBoxFuture<'a, HandlerResult>>;

/// Subscriber lists for update / join / leave notifications.
///
/// Emission walks the handlers of one kind in subscription order and awaits
/// each before starting the next, so a notification is done only once every
/// handler has finished.
pub struct RosterEvents {
    update_handlers: Vec<UpdateHandler>,
    join_handlers: Vec<JoinHandler>,
    leave_handlers: Vec<LeaveHandler>,
    error_policy: HandlerErrorPolicy,
}

impl RosterEvents {
    pub fn new(error_policy: HandlerErrorPolicy) -> Self {
        Self {
            update_handlers: Vec::new(),
            join_handlers: Vec::new(),
            leave_handlers: Vec::new(),
            error_policy,
        }
    }

    // Subscription

    pub fn on_update<F>(&mut self, handler: F)
    where
        F: 'static + for<'a> Fn(&'a PlayerRecord, &'a PlayerDelta) -> LocalBoxFuture<'a, HandlerResult>,
    {
        self.update_handlers.push(Box::new(handler));
    }

    pub fn on_join<F>(&mut self, handler: F)
    where
        F: 'static + for<'a> Fn(&'a PlayerRecord) -> LocalBoxFuture<'a, HandlerResult>,
    {
        self.join_handlers.push(Box::new(handler));
    }

    pub fn on_leave<F>(&mut self, handler: F)
    where
        F: 'static + for<'a> Fn(&'a PlayerId, &'a Roster) -> LocalBoxFuture<'a, HandlerResult>,
    {
        self.leave_handlers.push(Box::new(handler));
    }

    pub fn handler_count(&self, kind: EventKind) -> usize {
        match kind {
            EventKind::Update => self.update_handlers.len(),
            EventKind::Join => self.join_handlers.len(),
            EventKind::Leave => self.leave_handlers.len(),
        }
    }

    pub fn error_policy(&self) -> HandlerErrorPolicy {
        self.error_policy
    }

    // Emission

    pub(crate) async fn emit_update(
        &self,
        player: &PlayerRecord,
        delta: &PlayerDelta,
    ) -> Result<(), RosterError> {
        for handler in &self.update_handlers {
            let result = handler(player, delta).await;
            self.settle(EventKind::Update, &player.uuid, result)?;
        }
        Ok(())
    }

    pub(crate) async fn emit_join(&self, player: &PlayerRecord) -> Result<(), RosterError> {
        for handler in &self.join_handlers {
            let result = handler(player).await;
            self.settle(EventKind::Join, &player.uuid, result)?;
        }
        Ok(())
    }

    pub(crate) async fn emit_leave(
        &self,
        uuid: &PlayerId,
        roster: &Roster,
    ) -> Result<(), RosterError> {
        for handler in &self.leave_handlers {
            let result = handler(uuid, roster).await;
            self.settle(EventKind::Leave, uuid, result)?;
        }
        Ok(())
    }

    fn settle(
        &self,
        kind: EventKind,
        player: &PlayerId,
        result: HandlerResult,
    ) -> Result<(), RosterError> {
        let Err(source) = result else {
            return Ok(());
        };
        match self.error_policy {
            HandlerErrorPolicy::Propagate => Err(RosterError::HandlerFailed {
                kind,
                player: player.clone(),
                source,
            }),
            HandlerErrorPolicy::LogAndContinue => {
                warn!("{} handler failed for player {}: {}", kind, player, source);
                Ok(())
            }
        }
    }
}

impl Default for RosterEvents {
    fn default() -> Self {
        Self::new(HandlerErrorPolicy::default())
    }
}
