use std::default::Default;

/// Contains Config properties which will be used by the PlayerTracker
#[derive(Clone, Debug)]
pub struct TrackerConfig {
    /// What emission does when a subscribed handler returns an error.
    pub handler_error_policy: HandlerErrorPolicy,
    /// Number of players the roster reserves room for up front.
    pub initial_capacity: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            handler_error_policy: HandlerErrorPolicy::default(),
            initial_capacity: 0,
        }
    }
}

/// How a failing notification handler is treated.
///
/// Either way, a merge that was already applied to the roster stays applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HandlerErrorPolicy {
    /// Stop at the first failure and return it to whoever delivered the
    /// packet. Remaining entries of that packet are not processed.
    #[default]
    Propagate,
    /// Log the failure and keep notifying the remaining handlers.
    LogAndContinue,
}
