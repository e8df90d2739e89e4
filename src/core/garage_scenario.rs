use crate::core::{Scenario, Section, Vehicle};
use crate::domain::vehicles::VehicleKind;
use crate::utils::error::Result;

pub const GARAGE_SCENARIO_TITLE: &str = "Activity 2 — Polymorphism: Vehicles.move()";

/// Vehicles paired with the label printed in front of their movement.
pub struct GarageScenario {
    vehicles: Vec<(String, Box<dyn Vehicle>)>,
}

impl GarageScenario {
    pub fn new(vehicles: Vec<(String, Box<dyn Vehicle>)>) -> Self {
        Self { vehicles }
    }

    pub fn from_kinds(kinds: &[VehicleKind]) -> Self {
        Self::new(
            kinds
                .iter()
                .map(|kind| (kind.name().to_string(), kind.build()))
                .collect(),
        )
    }
}

impl Scenario for GarageScenario {
    fn title(&self) -> &str {
        GARAGE_SCENARIO_TITLE
    }

    fn perform(&self) -> Result<Section> {
        let mut section = Section::new(GARAGE_SCENARIO_TITLE);
        for (label, vehicle) in &self.vehicles {
            section.push(format!("{}: {}", label, vehicle.travel()));
        }
        Ok(section)
    }
}
