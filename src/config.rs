use crate::channel::Channel;
use crate::command::CancelMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading or writing the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// User settings, persisted between runs.
///
/// Missing fields fall back to their defaults so older files keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PainterConfig {
    pub brush_radius: f32,
    /// Radius change per wheel notch
    pub wheel_factor: f32,
    pub channel: Channel,
    pub cancel_mode: CancelMode,
    pub export_path: PathBuf,
    pub screenshot_path: PathBuf,
}

impl Default for PainterConfig {
    fn default() -> Self {
        Self {
            brush_radius: 40.0,
            wheel_factor: 10.0,
            channel: Channel::A,
            cancel_mode: CancelMode::RemoveLastDigit,
            export_path: PathBuf::from("image.png"),
            screenshot_path: PathBuf::from("screenshot.png"),
        }
    }
}

impl PainterConfig {
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let json = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.brush_radius.is_finite() && self.brush_radius >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "brush_radius must be a non-negative number, got {}",
                self.brush_radius
            )));
        }
        if !self.wheel_factor.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "wheel_factor must be finite, got {}",
                self.wheel_factor
            )));
        }
        Ok(())
    }
}
