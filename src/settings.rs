//! Leaderboard settings
//!
//! Supplied by the host at construction, optionally read from a JSON file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Leaderboard configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderboardSettings {
    /// Where the ranked table is persisted
    pub data_path: PathBuf,

    // === Initials entry ===
    /// Seconds between cursor blink toggles (0 disables blinking)
    pub blink_interval_secs: f32,
    /// Minimum axis magnitude for a directional pulse
    pub axis_deadzone: f32,
    /// Minimum axis change since the previous tick for a directional pulse
    pub axis_delta_threshold: f32,
}

impl Default for LeaderboardSettings {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("_data/leaderboard_data.sav"),
            blink_interval_secs: 0.3,
            axis_deadzone: 0.5,
            axis_delta_threshold: 0.3,
        }
    }
}

impl LeaderboardSettings {
    /// Default settings persisting to `path`
    pub fn with_data_path(path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: path.into(),
            ..Self::default()
        }
    }

    /// Reject values the input handling cannot work with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.blink_interval_secs.is_finite() || self.blink_interval_secs < 0.0 {
            return Err(SettingsError::Invalid(format!(
                "blink_interval_secs must be a non-negative number, got {}",
                self.blink_interval_secs
            )));
        }
        for (name, value) in [
            ("axis_deadzone", self.axis_deadzone),
            ("axis_delta_threshold", self.axis_delta_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SettingsError::Invalid(format!(
                    "{name} must be within 0..=1, got {value}"
                )));
            }
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file; missing keys take their defaults
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json_str(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }
}
