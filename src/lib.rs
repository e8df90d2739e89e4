pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, OutputFormat};

pub use config::RosterConfig;
pub use core::showcase::Showcase;
pub use domain::model::{Battery, Device, Section, Smartphone, Transcript};
pub use domain::ports::{Gadget, Scenario, Vehicle};
pub use domain::vehicles::{default_garage, Bike, Car, Plane, VehicleKind};
pub use utils::error::{Result, ShowcaseError};
