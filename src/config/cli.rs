use crate::config::roster::RosterConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "oop-showcase")]
#[command(about = "Walks devices and vehicles through a scripted demo")]
pub struct CliConfig {
    /// TOML roster to run instead of the built-in classic demo
    #[arg(long)]
    pub roster: Option<String>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn load_roster(&self) -> Result<RosterConfig> {
        let roster = match &self.roster {
            Some(path) => {
                tracing::info!("📁 Loading roster from: {}", path);
                RosterConfig::from_file(path)?
            }
            None => {
                tracing::debug!("No roster given, using the classic demo");
                RosterConfig::classic()
            }
        };
        roster.validate()?;
        Ok(roster)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.roster {
            validate_path("roster", path)?;
        }
        Ok(())
    }
}
