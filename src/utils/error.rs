use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShowcaseError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Device '{device}' does not support action '{action}'")]
    UnsupportedAction { device: String, action: String },
}

impl ShowcaseError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ShowcaseError::IoError(_) => "Check that the roster file exists and is readable",
            ShowcaseError::SerializationError(_) => "Try the text output format instead",
            ShowcaseError::ConfigParseError { .. } => "Make sure the roster is valid TOML",
            ShowcaseError::InvalidConfigValueError { .. } => {
                "Fix the highlighted roster field and run again"
            }
            ShowcaseError::UnsupportedAction { .. } => {
                "Give the device a phone_number or remove the phone-only action"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;
