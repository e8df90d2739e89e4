pub mod device_scenario;
pub mod garage_scenario;
pub mod showcase;

pub use crate::domain::model::{Device, Section, Smartphone, Transcript};
pub use crate::domain::ports::{Gadget, Scenario, Vehicle};
pub use crate::utils::error::Result;
