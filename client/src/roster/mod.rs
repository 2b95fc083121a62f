pub mod lifecycle;
pub mod merge;
#[allow(clippy::module_inception)]
pub mod roster;
