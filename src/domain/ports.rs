use crate::domain::model::Section;
use crate::utils::error::Result;
use std::fmt;

/// Contract shared by every battery-powered device.
///
/// Display is a supertrait so that formatting a `dyn Gadget` always goes
/// through the concrete type's `specs()`.
pub trait Gadget: fmt::Display {
    fn brand(&self) -> &str;
    fn model(&self) -> &str;
    fn battery_level(&self) -> u8;

    /// Adds `amount` percent, clamped to [0, 100]. Negative amounts drain.
    fn charge(&mut self, amount: i64);

    /// Active use for `minutes`; each implementation picks its own drain rate.
    fn use_for(&mut self, minutes: i64);

    fn specs(&self) -> String;
}

/// Movement capability. No default body: every vehicle supplies its own.
pub trait Vehicle {
    fn travel(&self) -> &'static str;
}

pub trait Scenario {
    fn title(&self) -> &str;
    fn perform(&self) -> Result<Section>;
}
