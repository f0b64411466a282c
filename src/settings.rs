//! Physics settings
//!
//! Process-wide flags (flight, debug) and the gravity field, persisted as
//! JSON next to the executable.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{WINDOW_HEIGHT_PX, WINDOW_WIDTH_PX};
use crate::sim::{GravityField, PhysicsConfig};

/// Errors while loading or saving settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings io: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Physics settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Player orbits the planet under gravity
    pub flight_mode: bool,
    /// Draw bounding circles
    pub debug_mode: bool,
    /// Window size (pixels)
    pub viewport: Vec2,
    /// Central planet
    pub gravity: GravityField,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            flight_mode: false,
            debug_mode: false,
            viewport: Vec2::new(WINDOW_WIDTH_PX, WINDOW_HEIGHT_PX),
            gravity: GravityField::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults if the file is missing or bad
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::info!("Using default settings ({})", e);
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Flags and field for the frame step
    pub fn physics_config(&self) -> PhysicsConfig {
        PhysicsConfig {
            flight_mode: self.flight_mode,
            debug_mode: self.debug_mode,
            gravity: self.gravity,
        }
    }

    /// Toggle orbital flight (bound to an input key by the game)
    pub fn toggle_flight(&mut self) {
        self.flight_mode = !self.flight_mode;
    }
}
