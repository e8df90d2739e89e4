use crate::domain::vehicles::VehicleKind;
use crate::utils::error::{Result, ShowcaseError};
use crate::utils::validation::{validate_no_placeholder, validate_not_empty, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub devices: Vec<DeviceEntry>,
    #[serde(default = "default_garage_kinds")]
    pub garage: Vec<VehicleKind>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceEntry {
    pub brand: String,
    pub model: String,
    /// Present means the entry is a smartphone.
    pub phone_number: Option<String>,
    pub battery: Option<i64>,
    #[serde(default)]
    pub actions: Vec<Action>,
    pub after_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Action {
    Use {
        minutes: i64,
    },
    Charge {
        amount: i64,
    },
    InstallApp {
        name: String,
    },
    Call {
        number: String,
        #[serde(default = "default_call_minutes")]
        minutes: i64,
    },
}

fn default_call_minutes() -> i64 {
    1
}

fn default_garage_kinds() -> Vec<VehicleKind> {
    VehicleKind::ALL.to_vec()
}

impl Action {
    /// The `op` tag as written in the roster.
    pub fn op(&self) -> &'static str {
        match self {
            Action::Use { .. } => "use",
            Action::Charge { .. } => "charge",
            Action::InstallApp { .. } => "install_app",
            Action::Call { .. } => "call",
        }
    }

    /// Short word used in generated "After ..." labels.
    pub fn verb(&self) -> &'static str {
        match self {
            Action::Use { .. } => "use",
            Action::Charge { .. } => "charge",
            Action::InstallApp { .. } => "install",
            Action::Call { .. } => "call",
        }
    }

    pub fn needs_phone(&self) -> bool {
        matches!(self, Action::InstallApp { .. } | Action::Call { .. })
    }
}

impl DeviceEntry {
    pub fn is_phone(&self) -> bool {
        self.phone_number.is_some()
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// Label printed before the final specs line, e.g. "After use/charge".
    pub fn after_label(&self) -> String {
        if let Some(label) = &self.after_label {
            return label.clone();
        }
        let mut verbs: Vec<&str> = Vec::new();
        for action in &self.actions {
            if !verbs.contains(&action.verb()) {
                verbs.push(action.verb());
            }
        }
        format!("After {}", verbs.join("/"))
    }
}

impl RosterConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ShowcaseError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are kept as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ShowcaseError::ConfigParseError {
            message: format!("placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// The roster of the classic classroom demo.
    pub fn classic() -> Self {
        Self {
            devices: vec![
                DeviceEntry {
                    brand: "Acme".to_string(),
                    model: "Tab-10".to_string(),
                    phone_number: None,
                    battery: Some(75),
                    actions: vec![Action::Use { minutes: 25 }, Action::Charge { amount: 10 }],
                    after_label: Some("After use/charge".to_string()),
                },
                DeviceEntry {
                    brand: "Pear".to_string(),
                    model: "iFruit 14".to_string(),
                    phone_number: Some("+266-5012-3456".to_string()),
                    battery: Some(65),
                    actions: vec![
                        Action::InstallApp {
                            name: "Maps".to_string(),
                        },
                        Action::InstallApp {
                            name: "Chat".to_string(),
                        },
                        Action::Use { minutes: 30 },
                        Action::Call {
                            number: "+266-7777-8888".to_string(),
                            minutes: 3,
                        },
                    ],
                    after_label: Some("After installs/use/call".to_string()),
                },
                DeviceEntry {
                    brand: "Samesung".to_string(),
                    model: "Galaxy S42".to_string(),
                    phone_number: Some("+266-5555-0000".to_string()),
                    battery: None,
                    actions: vec![Action::InstallApp {
                        name: "Music".to_string(),
                    }],
                    after_label: Some("Installed 'Music'".to_string()),
                },
            ],
            garage: default_garage_kinds(),
        }
    }
}

impl Validate for RosterConfig {
    fn validate(&self) -> Result<()> {
        for (index, entry) in self.devices.iter().enumerate() {
            for (name, value) in [("brand", &entry.brand), ("model", &entry.model)] {
                let field = format!("devices[{}].{}", index, name);
                validate_not_empty(&field, value)?;
                validate_no_placeholder(&field, value)?;
            }

            if let Some(number) = &entry.phone_number {
                let field = format!("devices[{}].phone_number", index);
                validate_not_empty(&field, number)?;
                validate_no_placeholder(&field, number)?;
            }

            for action in &entry.actions {
                if action.needs_phone() && !entry.is_phone() {
                    return Err(ShowcaseError::UnsupportedAction {
                        device: entry.label(),
                        action: action.op().to_string(),
                    });
                }
                if let Action::InstallApp { name } = action {
                    validate_not_empty(&format!("devices[{}].actions.name", index), name)?;
                }
            }
        }
        Ok(())
    }
}
