//! Bounded volume value.
//!
//! A [`Volume`] can only be built through its clamping constructors, so every
//! instance lies in `MIN_VOLUME..=MAX_VOLUME`.

use std::fmt;

use crate::config::{DEFAULT_VOLUME, MAX_VOLUME, MIN_VOLUME};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Volume(u8);

impl Volume {
    pub const MIN: Volume = Volume(MIN_VOLUME);
    pub const MAX: Volume = Volume(MAX_VOLUME);

    /// Clamp any integer into range.
    pub fn clamped(value: i32) -> Self {
        Volume(value.clamp(MIN_VOLUME as i32, MAX_VOLUME as i32) as u8)
    }

    /// Convert a continuous slider position into a volume.
    ///
    /// Rounds to the nearest integer (ties away from zero) and clamps.
    /// Returns `None` for NaN, which has no meaningful position.
    pub fn from_position(position: f64) -> Option<Self> {
        if position.is_nan() {
            return None;
        }
        let bounded = position.round().clamp(MIN_VOLUME as f64, MAX_VOLUME as f64);
        Some(Volume(bounded as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Move by `delta` steps, saturating at the range bounds.
    pub fn offset(self, delta: i32) -> Self {
        Self::clamped(self.0 as i32 + delta)
    }
}

impl Default for Volume {
    fn default() -> Self {
        Volume(DEFAULT_VOLUME)
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
