pub mod event_kind;
pub mod roster_events;
