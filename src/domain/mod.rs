// Domain layer: the device and vehicle models plus the traits they are used through.

pub mod model;
pub mod ports;
pub mod vehicles;
