//! Game settings
//!
//! Loaded from an optional JSON file; every field falls back to its default.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::TICK_INTERVAL_MS;

/// Why a settings file could not be used
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(err) => write!(f, "cannot read settings: {err}"),
            SettingsError::Parse(err) => write!(f, "invalid settings JSON: {err}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(err) => Some(err),
            SettingsError::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(err: std::io::Error) -> Self {
        SettingsError::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Parse(err)
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed RNG seed; random per run when absent
    pub seed: Option<u64>,
    /// Sleep between ticks
    pub tick_interval_ms: u64,
    /// Stop after this many ticks (headless runs). `None` runs until killed.
    pub max_ticks: Option<u64>,

    // === Audio ===
    pub muted: bool,
    /// External player argv for the impact sound, e.g. `["afplay", "explosion.mp3"]`
    pub impact_command: Option<Vec<String>>,
    /// External player argv for the background track, restarted whenever it ends
    pub music_command: Option<Vec<String>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            tick_interval_ms: TICK_INTERVAL_MS,
            max_ticks: None,
            muted: false,
            impact_command: None,
            music_command: None,
        }
    }
}

impl Settings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Configured seed, or a fresh random one
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from `path` if given, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("{} ({}); using defaults", err, path.display());
                Self::default()
            }
        }
    }
}
