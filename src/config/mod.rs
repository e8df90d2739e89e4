pub mod roster;

#[cfg(feature = "cli")]
pub mod cli;

pub use roster::{Action, DeviceEntry, RosterConfig};
