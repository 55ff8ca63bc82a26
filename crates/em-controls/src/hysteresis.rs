//! Dual-threshold relay switching.
//!
//! The relay turns on when `|I| > on_threshold` and off when
//! `|I| < off_threshold`. Inside the dead band `[off, on]` the state holds,
//! which keeps the relay from chattering on a noisy signal near one threshold.

use core::fmt;

use em_core::constants::{OFF_THRESHOLD, ON_THRESHOLD};
use serde::{Deserialize, Serialize};

use crate::error::{ControlError, ControlResult};

/// Relay output state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RelayState {
    #[default]
    Off,
    On,
}

impl RelayState {
    pub fn is_on(self) -> bool {
        matches!(self, RelayState::On)
    }

    /// Literal used in the log file.
    pub fn as_str(self) -> &'static str {
        match self {
            RelayState::Off => "OFF",
            RelayState::On => "ON",
        }
    }
}

impl From<bool> for RelayState {
    fn from(on: bool) -> Self {
        if on { RelayState::On } else { RelayState::Off }
    }
}

impl fmt::Display for RelayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hysteresis thresholds (A).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HysteresisConfig {
    /// Off → On above this magnitude.
    pub on_threshold: f64,
    /// On → Off below this magnitude.
    pub off_threshold: f64,
}

impl HysteresisConfig {
    pub fn new(on_threshold: f64, off_threshold: f64) -> ControlResult<Self> {
        if off_threshold.is_nan() || off_threshold < 0.0 {
            return Err(ControlError::InvalidArg {
                what: "off_threshold must be non-negative",
            });
        }
        if on_threshold.is_nan() || off_threshold >= on_threshold {
            return Err(ControlError::InvalidArg {
                what: "off_threshold must be less than on_threshold",
            });
        }
        Ok(Self {
            on_threshold,
            off_threshold,
        })
    }

    /// Next relay state given the current state and the measured current.
    pub fn next_state(&self, state: RelayState, current_amps: f64) -> RelayState {
        let magnitude = current_amps.abs();
        match state {
            RelayState::Off if magnitude > self.on_threshold => RelayState::On,
            RelayState::On if magnitude < self.off_threshold => RelayState::Off,
            held => held,
        }
    }
}

impl Default for HysteresisConfig {
    fn default() -> Self {
        Self {
            on_threshold: ON_THRESHOLD,
            off_threshold: OFF_THRESHOLD,
        }
    }
}
