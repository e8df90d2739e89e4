use crate::domain::ports::Gadget;
use serde::Serialize;
use std::fmt;

const MIN_LEVEL: i64 = 0;
const MAX_LEVEL: i64 = 100;

/// Charge level in percent, always within [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Battery(u8);

impl Battery {
    pub fn new(level: i64) -> Self {
        Self(clamp_level(level))
    }

    pub fn level(&self) -> u8 {
        self.0
    }

    pub fn charge(&mut self, amount: i64) {
        self.0 = clamp_level(i64::from(self.0).saturating_add(amount));
    }

    pub fn drain(&mut self, amount: i64) {
        self.0 = clamp_level(i64::from(self.0).saturating_sub(amount));
    }
}

impl Default for Battery {
    fn default() -> Self {
        Self(MAX_LEVEL as u8)
    }
}

fn clamp_level(value: i64) -> u8 {
    // the clamp keeps the value inside u8 range
    value.clamp(MIN_LEVEL, MAX_LEVEL) as u8
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    brand: String,
    model: String,
    battery: Battery,
}

impl Device {
    pub fn new(brand: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            battery: Battery::default(),
        }
    }

    pub fn with_battery(brand: impl Into<String>, model: impl Into<String>, level: i64) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            battery: Battery::new(level),
        }
    }

    /// Lowers the battery by `amount`, stopping at zero. Only the device
    /// family may call this; outside the crate the level can only move
    /// through `charge` and `use_for`.
    pub(crate) fn drain(&mut self, amount: i64) {
        self.battery.drain(amount);
    }
}

impl Gadget for Device {
    fn brand(&self) -> &str {
        &self.brand
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn battery_level(&self) -> u8 {
        self.battery.level()
    }

    fn charge(&mut self, amount: i64) {
        self.battery.charge(amount);
    }

    /// 1% per 10 minutes.
    fn use_for(&mut self, minutes: i64) {
        self.drain((minutes / 10).max(0));
    }

    fn specs(&self) -> String {
        format!(
            "{} {} — Battery: {}%",
            self.brand,
            self.model,
            self.battery_level()
        )
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.specs())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Smartphone {
    base: Device,
    phone_number: String,
    installed_apps: Vec<String>,
}

impl Smartphone {
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            base: Device::new(brand, model),
            phone_number: phone_number.into(),
            installed_apps: Vec::new(),
        }
    }

    pub fn with_battery(
        brand: impl Into<String>,
        model: impl Into<String>,
        phone_number: impl Into<String>,
        level: i64,
    ) -> Self {
        Self {
            base: Device::with_battery(brand, model, level),
            phone_number: phone_number.into(),
            installed_apps: Vec::new(),
        }
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn installed_apps(&self) -> &[String] {
        &self.installed_apps
    }

    /// Installs `name` unless it is already present. A fresh install costs
    /// 1%; a duplicate changes nothing. Returns whether the app was added.
    pub fn install_app(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.installed_apps.contains(&name) {
            tracing::debug!("{} already installed on {}", name, self.phone_number);
            return false;
        }
        self.installed_apps.push(name);
        self.base.drain(1);
        true
    }

    pub fn call(&mut self, number: &str) {
        self.call_for(number, 1);
    }

    /// Every call costs at least 1%, whatever the duration.
    pub fn call_for(&mut self, number: &str, minutes: i64) {
        tracing::debug!("{} calling {} for {} min", self.phone_number, number, minutes);
        self.base.drain(minutes.max(1));
    }
}

impl Gadget for Smartphone {
    fn brand(&self) -> &str {
        self.base.brand()
    }

    fn model(&self) -> &str {
        self.base.model()
    }

    fn battery_level(&self) -> u8 {
        self.base.battery_level()
    }

    fn charge(&mut self, amount: i64) {
        self.base.charge(amount);
    }

    /// 1% per 5 minutes, twice the rate of a plain device.
    fn use_for(&mut self, minutes: i64) {
        self.base.drain((minutes / 5).max(0));
    }

    fn specs(&self) -> String {
        format!(
            "{} {} (📱 {}) — Apps: {}, Battery: {}%",
            self.brand(),
            self.model(),
            self.phone_number,
            self.installed_apps.len(),
            self.battery_level()
        )
    }
}

impl fmt::Display for Smartphone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.specs())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    pub lines: Vec<String>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Transcript {
    pub sections: Vec<Section>,
}

impl Transcript {
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for (index, section) in self.sections.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            out.push_str(&format!("=== {} ===\n", section.title));
            for line in &section.lines {
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }

    pub fn render_json(&self) -> crate::utils::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_clamps_battery() {
        assert_eq!(Device::with_battery("A", "B", 150).battery_level(), 100);
        assert_eq!(Device::with_battery("A", "B", -20).battery_level(), 0);
        assert_eq!(Device::with_battery("A", "B", 42).battery_level(), 42);
        assert_eq!(Device::new("A", "B").battery_level(), 100);
        assert_eq!(Device::with_battery("A", "B", 5_000_000_000).battery_level(), 100);
        assert_eq!(Device::with_battery("A", "B", i64::MIN).battery_level(), 0);
    }

    #[test]
    fn test_extreme_durations_drain_to_zero() {
        let mut device = Device::new("A", "B");
        device.use_for(99_999_999_999);
        assert_eq!(device.battery_level(), 0);

        let mut phone = Smartphone::new("A", "B", "555");
        phone.call_for("x", i64::MAX);
        assert_eq!(phone.battery_level(), 0);
        phone.charge(i64::MAX);
        phone.use_for(i64::MIN);
        assert_eq!(phone.battery_level(), 100);
    }

    #[test]
    fn test_charge_then_use() {
        let mut device = Device::with_battery("A", "B", 50);
        device.charge(10);
        assert_eq!(device.battery_level(), 60);
        device.use_for(25);
        assert_eq!(device.battery_level(), 58);
    }

    #[test]
    fn test_charge_clamps_both_ways() {
        let mut device = Device::with_battery("A", "B", 95);
        device.charge(20);
        assert_eq!(device.battery_level(), 100);

        // negative charge drains
        device.charge(-30);
        assert_eq!(device.battery_level(), 70);
        device.charge(-500);
        assert_eq!(device.battery_level(), 0);

        device.charge(i64::MAX);
        assert_eq!(device.battery_level(), 100);
        device.charge(i64::MIN);
        assert_eq!(device.battery_level(), 0);
    }

    #[test]
    fn test_negative_use_does_not_drain() {
        let mut device = Device::with_battery("A", "B", 80);
        device.use_for(-45);
        assert_eq!(device.battery_level(), 80);

        let mut phone = Smartphone::with_battery("A", "B", "1", 80);
        phone.use_for(-45);
        assert_eq!(phone.battery_level(), 80);
    }

    #[test]
    fn test_use_drain_stops_at_zero() {
        let mut device = Device::with_battery("A", "B", 3);
        device.use_for(600);
        assert_eq!(device.battery_level(), 0);
    }

    #[test]
    fn test_smartphone_drains_twice_as_fast() {
        let mut device = Device::new("A", "B");
        let mut phone = Smartphone::new("A", "B", "555");
        device.use_for(20);
        phone.use_for(20);
        assert_eq!(device.battery_level(), 98);
        assert_eq!(phone.battery_level(), 96);
    }

    #[test]
    fn test_install_app_is_idempotent() {
        let mut phone = Smartphone::new("A", "B", "555");
        assert!(phone.install_app("Maps"));
        assert!(!phone.install_app("Maps"));
        assert_eq!(phone.installed_apps(), ["Maps".to_string()]);
        assert_eq!(phone.battery_level(), 99);
    }

    #[test]
    fn test_install_app_preserves_order() {
        let mut phone = Smartphone::new("A", "B", "555");
        phone.install_app("Maps");
        phone.install_app("Chat");
        phone.install_app("maps");
        assert_eq!(phone.installed_apps(), ["Maps", "Chat", "maps"]);
        assert_eq!(phone.battery_level(), 97);
    }

    #[test]
    fn test_call_drains_at_least_one() {
        let mut phone = Smartphone::with_battery("A", "B", "555", 50);
        phone.call_for("x", 0);
        assert_eq!(phone.battery_level(), 49);
        phone.call_for("x", -10);
        assert_eq!(phone.battery_level(), 48);
        phone.call_for("x", 3);
        assert_eq!(phone.battery_level(), 45);
        phone.call("x");
        assert_eq!(phone.battery_level(), 44);
    }

    #[test]
    fn test_specs_formats() {
        let device = Device::with_battery("Acme", "Tab-10", 75);
        assert_eq!(device.specs(), "Acme Tab-10 — Battery: 75%");
        assert_eq!(device.to_string(), device.specs());

        let mut phone = Smartphone::with_battery("Pear", "iFruit 14", "+266-5012-3456", 65);
        phone.install_app("Maps");
        assert_eq!(
            phone.to_string(),
            "Pear iFruit 14 (📱 +266-5012-3456) — Apps: 1, Battery: 64%"
        );
    }

    #[test]
    fn test_dynamic_dispatch_through_gadget() {
        let mut gadgets: Vec<Box<dyn Gadget>> = vec![
            Box::new(Device::new("Acme", "Tab-10")),
            Box::new(Smartphone::new("Pear", "iFruit 14", "+266-5012-3456")),
        ];
        for gadget in gadgets.iter_mut() {
            gadget.use_for(20);
        }

        assert_eq!(gadgets[0].battery_level(), 98);
        assert_eq!(gadgets[1].battery_level(), 96);

        let described = gadgets[1].to_string();
        assert!(described.contains("+266-5012-3456"));
        assert!(described.contains("Apps: 0"));
        assert!(!described.starts_with("Pear iFruit 14 — Battery"));
    }

    #[test]
    fn test_transcript_render_text() {
        let mut first = Section::new("One");
        first.push("a");
        first.push("b");
        let mut second = Section::new("Two");
        second.push("c");
        let transcript = Transcript {
            sections: vec![first, second],
        };

        assert_eq!(
            transcript.render_text(),
            "=== One ===\na\nb\n\n=== Two ===\nc\n"
        );
    }

    #[test]
    fn test_transcript_render_json() {
        let mut section = Section::new("One");
        section.push("a");
        let transcript = Transcript {
            sections: vec![section],
        };

        let json: serde_json::Value =
            serde_json::from_str(&transcript.render_json().unwrap()).unwrap();
        assert_eq!(json["sections"][0]["title"], "One");
        assert_eq!(json["sections"][0]["lines"][0], "a");
    }
}
