//! Application-level configuration constants and panel options.

use serde::Deserialize;

use crate::error::PanelError;

// Volume range
pub const MIN_VOLUME: u8 = 0;
pub const MAX_VOLUME: u8 = 100;
pub const VOLUME_STEP: u8 = 1;
pub const DEFAULT_VOLUME: u8 = 50;

// Page integration
pub const OPTIONS_ELEMENT_ID: &str = "settings_options";

/// Which value a readout shows right after an increment or decrement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadoutSync {
    /// Readout shows the value the click produced.
    #[default]
    AfterUpdate,
    /// Readout shows the value read before the click, one step behind.
    BeforeUpdate,
}

/// What the open and close controls do to the panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerMode {
    /// Open control always opens, close control always closes.
    #[default]
    Explicit,
    /// Both controls flip the panel, whatever its current state.
    Toggle,
}

/// Behavior switches read from the page at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PanelOptions {
    pub readout_sync: ReadoutSync,
    pub trigger_mode: TriggerMode,
}

impl PanelOptions {
    /// Parse options from a JSON object. Missing fields take their defaults.
    pub fn from_json(input: &str) -> Result<Self, PanelError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(trimmed).map_err(|e| PanelError::InvalidOptions(e.to_string()))
    }
}
