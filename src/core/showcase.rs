use crate::config::roster::RosterConfig;
use crate::core::device_scenario::DeviceScenario;
use crate::core::garage_scenario::GarageScenario;
use crate::core::{Scenario, Transcript};
use crate::utils::error::Result;

/// Runs scenarios in order and collects their sections.
pub struct Showcase {
    scenarios: Vec<Box<dyn Scenario>>,
}

impl Showcase {
    pub fn new() -> Self {
        Self {
            scenarios: Vec::new(),
        }
    }

    pub fn from_roster(roster: &RosterConfig) -> Self {
        Self::new()
            .with_scenario(DeviceScenario::new(roster.devices.clone()))
            .with_scenario(GarageScenario::from_kinds(&roster.garage))
    }

    pub fn with_scenario(mut self, scenario: impl Scenario + 'static) -> Self {
        self.scenarios.push(Box::new(scenario));
        self
    }

    pub fn run(&self) -> Result<Transcript> {
        tracing::info!("Starting showcase with {} scenarios", self.scenarios.len());

        let mut transcript = Transcript::default();
        for scenario in &self.scenarios {
            tracing::debug!("Running scenario: {}", scenario.title());
            let section = scenario.perform()?;
            tracing::debug!("{} produced {} lines", scenario.title(), section.lines.len());
            transcript.sections.push(section);
        }

        tracing::info!("✅ Showcase finished");
        Ok(transcript)
    }
}

impl Default for Showcase {
    fn default() -> Self {
        Self::new()
    }
}
