use crate::domain::ports::Vehicle;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Car;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bike;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Plane;

impl Vehicle for Car {
    fn travel(&self) -> &'static str {
        "Driving 🚗"
    }
}

impl Vehicle for Bike {
    fn travel(&self) -> &'static str {
        "Riding 🚲"
    }
}

impl Vehicle for Plane {
    fn travel(&self) -> &'static str {
        "Flying ✈️"
    }
}

/// Vehicle selector as written in a roster file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    Car,
    Bike,
    Plane,
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 3] = [VehicleKind::Car, VehicleKind::Bike, VehicleKind::Plane];

    pub fn name(self) -> &'static str {
        match self {
            VehicleKind::Car => "Car",
            VehicleKind::Bike => "Bike",
            VehicleKind::Plane => "Plane",
        }
    }

    pub fn build(self) -> Box<dyn Vehicle> {
        match self {
            VehicleKind::Car => Box::new(Car),
            VehicleKind::Bike => Box::new(Bike),
            VehicleKind::Plane => Box::new(Plane),
        }
    }
}

pub fn default_garage() -> Vec<Box<dyn Vehicle>> {
    VehicleKind::ALL.iter().map(|kind| kind.build()).collect()
}
