//! Tick-to-tick event flags.
//!
//! Every comparison is against the previous tick's value, not against a
//! filtered or stable baseline. Both thresholds are strict (`>`).

use em_core::constants::{CURRENT_SPIKE_THRESHOLD, VOLTAGE_FLUCTUATION_THRESHOLD};
use serde::{Deserialize, Serialize};

use crate::hysteresis::RelayState;

/// Change thresholds for event detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventThresholds {
    /// Current delta (A) above which a spike is flagged.
    pub current_spike_a: f64,
    /// Voltage sensor delta (V) above which a fluctuation is flagged.
    pub voltage_fluctuation_v: f64,
}

impl Default for EventThresholds {
    fn default() -> Self {
        Self {
            current_spike_a: CURRENT_SPIKE_THRESHOLD,
            voltage_fluctuation_v: VOLTAGE_FLUCTUATION_THRESHOLD,
        }
    }
}

/// Flags raised on a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TickEvents {
    pub actuator_changed: bool,
    pub current_spike: bool,
    pub voltage_fluctuation: bool,
}

impl EventThresholds {
    pub fn is_current_spike(&self, current_amps: f64, prev_current: f64) -> bool {
        (current_amps - prev_current).abs() > self.current_spike_a
    }

    pub fn is_voltage_fluctuation(&self, voltage: f64, prev_voltage: f64) -> bool {
        (voltage - prev_voltage).abs() > self.voltage_fluctuation_v
    }

    pub fn detect(
        &self,
        relay_before: RelayState,
        relay_after: RelayState,
        current_amps: f64,
        prev_current: f64,
        voltage: f64,
        prev_voltage: f64,
    ) -> TickEvents {
        TickEvents {
            actuator_changed: relay_before != relay_after,
            current_spike: self.is_current_spike(current_amps, prev_current),
            voltage_fluctuation: self.is_voltage_fluctuation(voltage, prev_voltage),
        }
    }
}
