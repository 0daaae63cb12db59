//! Host settings and preferences
//!
//! Loaded from a JSON file. Missing fields take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_FRAME_DT, SIM_DT};
use crate::error::{LoadError, load_json};
use crate::platform::KeyBinding;

/// Host settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Key to action map
    pub bindings: Vec<KeyBinding>,

    // === Timing ===
    /// Fixed step per frame in seconds; `None` uses the wall clock
    pub fixed_step: Option<f64>,
    /// Largest frame delta handed to the simulation
    pub max_frame_dt: f64,

    // === HUD ===
    /// Print a `Frame: N` line after every frame
    pub show_frame_counter: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bindings: KeyBinding::defaults(),

            fixed_step: Some(SIM_DT),
            max_frame_dt: MAX_FRAME_DT,

            show_frame_counter: true,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let settings: Settings = load_json(path)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings.validated())
    }

    /// Load settings if a path is given, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{}, using default settings", e);
                Self::default()
            }
        }
    }

    /// Replace out-of-range values with defaults
    fn validated(mut self) -> Self {
        let defaults = Self::default();
        if !(self.max_frame_dt.is_finite() && self.max_frame_dt > 0.0) {
            log::warn!("max_frame_dt must be > 0, using default");
            self.max_frame_dt = defaults.max_frame_dt;
        }
        if let Some(step) = self.fixed_step {
            if !(step.is_finite() && step > 0.0) {
                log::warn!("fixed_step must be > 0, using default");
                self.fixed_step = defaults.fixed_step;
            }
        }
        if self.bindings.is_empty() {
            log::warn!("No key bindings configured, using defaults");
            self.bindings = defaults.bindings;
        }
        self
    }
}
