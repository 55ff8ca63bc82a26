//! Sampling cadence.
//!
//! The loop runs at a fixed period. The same period is used as `Δt` for
//! energy integration, regardless of how long each tick actually took.

use std::time::Duration;

use em_core::constants::TICK_INTERVAL_S;
use serde::{Deserialize, Serialize};

use crate::error::{ControlError, ControlResult};

/// Sample configuration for the acquisition loop.
///
/// The period is only reachable through [`SampleConfig::new`] (or the
/// equivalent `TryFrom<f64>` used by serde), so it is always positive and
/// finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SampleConfig {
    dt: f64,
}

impl SampleConfig {
    /// Create a new sample configuration.
    ///
    /// # Errors
    ///
    /// Returns error if `dt` is not a positive, finite number of seconds.
    pub fn new(dt: f64) -> ControlResult<Self> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(ControlError::InvalidArg {
                what: "sample period must be positive",
            });
        }
        Ok(Self { dt })
    }

    /// Sample period in seconds.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Sample period as a wall-clock duration.
    pub fn period(&self) -> Duration {
        Duration::from_secs_f64(self.dt)
    }
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            dt: TICK_INTERVAL_S,
        }
    }
}

impl TryFrom<f64> for SampleConfig {
    type Error = ControlError;

    fn try_from(dt: f64) -> ControlResult<Self> {
        Self::new(dt)
    }
}

impl From<SampleConfig> for f64 {
    fn from(config: SampleConfig) -> Self {
        config.dt
    }
}
