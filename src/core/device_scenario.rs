use crate::config::roster::{Action, DeviceEntry};
use crate::core::{Device, Gadget, Scenario, Section, Smartphone};
use crate::utils::error::{Result, ShowcaseError};

pub const DEVICE_SCENARIO_TITLE: &str = "Activity 1 — Device / Smartphone";

/// A live roster entry. Phone-only actions need the concrete smartphone,
/// everything else goes through `dyn Gadget`.
enum Fixture {
    Plain(Device),
    Phone(Smartphone),
}

impl Fixture {
    fn from_entry(entry: &DeviceEntry) -> Self {
        let battery = entry.battery.unwrap_or(100);
        match &entry.phone_number {
            Some(number) => Fixture::Phone(Smartphone::with_battery(
                entry.brand.as_str(),
                entry.model.as_str(),
                number.as_str(),
                battery,
            )),
            None => Fixture::Plain(Device::with_battery(
                entry.brand.as_str(),
                entry.model.as_str(),
                battery,
            )),
        }
    }

    fn as_gadget(&self) -> &dyn Gadget {
        match self {
            Fixture::Plain(device) => device,
            Fixture::Phone(phone) => phone,
        }
    }

    fn as_gadget_mut(&mut self) -> &mut dyn Gadget {
        match self {
            Fixture::Plain(device) => device,
            Fixture::Phone(phone) => phone,
        }
    }

    fn phone_mut(&mut self, action: &Action) -> Result<&mut Smartphone> {
        match self {
            Fixture::Phone(phone) => Ok(phone),
            Fixture::Plain(device) => Err(ShowcaseError::UnsupportedAction {
                device: format!("{} {}", device.brand(), device.model()),
                action: action.op().to_string(),
            }),
        }
    }

    fn apply(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Use { minutes } => self.as_gadget_mut().use_for(*minutes),
            Action::Charge { amount } => self.as_gadget_mut().charge(*amount),
            Action::InstallApp { name } => {
                self.phone_mut(action)?.install_app(name.as_str());
            }
            Action::Call { number, minutes } => {
                self.phone_mut(action)?.call_for(number, *minutes);
            }
        }
        Ok(())
    }
}

pub struct DeviceScenario {
    entries: Vec<DeviceEntry>,
}

impl DeviceScenario {
    pub fn new(entries: Vec<DeviceEntry>) -> Self {
        Self { entries }
    }
}

impl Scenario for DeviceScenario {
    fn title(&self) -> &str {
        DEVICE_SCENARIO_TITLE
    }

    fn perform(&self) -> Result<Section> {
        let mut section = Section::new(DEVICE_SCENARIO_TITLE);

        for entry in &self.entries {
            let mut fixture = Fixture::from_entry(entry);
            section.push(fixture.as_gadget().to_string());

            if entry.actions.is_empty() {
                continue;
            }
            for action in &entry.actions {
                fixture.apply(action)?;
            }
            tracing::debug!(
                "{} battery now {}%",
                entry.label(),
                fixture.as_gadget().battery_level()
            );
            section.push(format!("{}: {}", entry.after_label(), fixture.as_gadget()));
        }

        Ok(section)
    }
}
