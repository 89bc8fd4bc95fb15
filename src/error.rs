//! Configuration errors
//!
//! The simulation itself never fails; only building an arena or loading
//! tuning data can.

use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    /// Arena interior is empty or too small to hold the player and target
    InvalidArena { width: f32, height: f32, border: f32 },
    /// A tuning value is out of its legal range
    InvalidTuning { field: &'static str, reason: &'static str },
    /// Tuning JSON could not be parsed
    Parse(serde_json::Error),
    /// Tuning file could not be read
    Io(std::io::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArena {
                width,
                height,
                border,
            } => write!(
                f,
                "invalid arena {}x{} with border {}: interior too small",
                width, height, border
            ),
            Self::InvalidTuning { field, reason } => {
                write!(f, "invalid tuning value `{}`: {}", field, reason)
            }
            Self::Parse(e) => write!(f, "failed to parse tuning: {}", e),
            Self::Io(e) => write!(f, "failed to read tuning file: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
