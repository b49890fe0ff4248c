//! Game settings
//!
//! Loaded from an optional JSON file; anything missing falls back to the
//! defaults in [`crate::consts`].

use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::input::InputMode;

/// Errors reading a settings file
#[derive(Debug)]
pub enum SettingsError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json(serde_json::Error),
    /// Parsed fine but a tuning value is out of range
    Invalid(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io { path, source } => {
                write!(f, "couldn't read settings {}: {source}", path.display())
            }
            SettingsError::Json(e) => write!(f, "invalid settings JSON: {e}"),
            SettingsError::Invalid(msg) => write!(f, "invalid settings: {msg}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io { source, .. } => Some(source),
            SettingsError::Json(e) => Some(e),
            SettingsError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Json(e)
    }
}

/// Runtime tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Pointer drag or accelerometer
    pub input_mode: InputMode,

    // === Player ===
    /// Where the player is created and respawned
    pub spawn_point: Vec2,
    pub player_radius: f32,
    /// Drag coefficient (> 0)
    pub linear_damping: f32,

    // === Respawn ===
    pub respawn_move_secs: f32,
    pub respawn_shrink_secs: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_mode: InputMode::Sensor,

            spawn_point: Vec2::new(PLAYER_SPAWN.0, PLAYER_SPAWN.1),
            player_radius: PLAYER_RADIUS,
            linear_damping: PLAYER_LINEAR_DAMPING,

            respawn_move_secs: RESPAWN_MOVE_SECS,
            respawn_shrink_secs: RESPAWN_SHRINK_SECS,
        }
    }
}

impl Settings {
    /// Defaults with a different input mode
    pub fn with_input_mode(input_mode: InputMode) -> Self {
        Self {
            input_mode,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Damping, radius and both respawn stages must be finite and > 0;
    /// the spawn point must be finite.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.spawn_point.is_finite() {
            return Err(SettingsError::Invalid(format!(
                "spawn_point must be finite, got {}",
                self.spawn_point
            )));
        }
        for (name, value) in [
            ("player_radius", self.player_radius),
            ("linear_damping", self.linear_damping),
            ("respawn_move_secs", self.respawn_move_secs),
            ("respawn_shrink_secs", self.respawn_shrink_secs),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::Invalid(format!(
                    "{name} must be finite and > 0, got {value}"
                )));
            }
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Read settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }
}
