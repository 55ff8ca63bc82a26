//! Energy accumulation.
//!
//! Rectangular (forward Euler) integration of instantaneous power over the
//! nominal tick interval: `E += P · Δt / 3600`. Negative power is not clamped,
//! so noise around zero current can pull the total down.

use em_core::SECONDS_PER_HOUR;
use serde::{Deserialize, Serialize};

/// Running energy total in watt-hours.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EnergyAccumulator {
    total_wh: f64,
}

impl EnergyAccumulator {
    /// Resume from a known total.
    pub fn with_total(total_wh: f64) -> Self {
        Self { total_wh }
    }

    /// Add `power_w` held for `dt_s` seconds and return the new total.
    pub fn integrate(&mut self, power_w: f64, dt_s: f64) -> f64 {
        self.total_wh += power_w * (dt_s / SECONDS_PER_HOUR);
        self.total_wh
    }
}
