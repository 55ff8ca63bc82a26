//! Per-tick controller.
//!
//! [`Controller::step`] is a pure function of the previous state and one
//! sample. It decides the relay state, integrates energy and raises event
//! flags. Driving the relay and writing the record is left to the caller,
//! which commits the returned state only once both have succeeded.

use serde::{Deserialize, Serialize};

use crate::calibration::Acs712Calibration;
use crate::energy::EnergyAccumulator;
use crate::events::{EventThresholds, TickEvents};
use crate::hysteresis::{HysteresisConfig, RelayState};
use crate::reading::{Reading, Sample};
use crate::sampled::SampleConfig;

/// State carried from one tick to the next.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ControllerState {
    /// Relay output after the last tick.
    pub actuator_on: bool,
    /// Current (A) measured on the last tick.
    pub prev_current: f64,
    /// Voltage sensor output (V) on the last tick.
    pub prev_voltage_sensor: f64,
    /// Energy total (Wh).
    pub cumulative_energy_wh: f64,
}

impl ControllerState {
    pub fn relay(&self) -> RelayState {
        RelayState::from(self.actuator_on)
    }
}

/// Everything derived on a single tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    pub reading: Reading,
    /// Relay state before this tick's hysteresis evaluation.
    pub relay_before: RelayState,
    /// Relay state after it.
    pub relay: RelayState,
    pub power_w: f64,
    pub cumulative_energy_wh: f64,
    pub events: TickEvents,
}

impl TickOutcome {
    /// The state the relay must be driven to, if it changed.
    pub fn transition(&self) -> Option<RelayState> {
        (self.relay != self.relay_before).then_some(self.relay)
    }
}

/// Controller configuration. Defaults to the compiled-in constants.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Controller {
    pub calibration: Acs712Calibration,
    pub hysteresis: HysteresisConfig,
    pub thresholds: EventThresholds,
    pub sample: SampleConfig,
}

impl Controller {
    /// Advance the controller by one tick.
    ///
    /// # Returns
    ///
    /// The state to commit once the tick's side effects succeed, and the
    /// derived outcome.
    pub fn step(&self, state: &ControllerState, sample: Sample) -> (ControllerState, TickOutcome) {
        let reading = Reading::from_sample(sample, &self.calibration);

        let relay_before = state.relay();
        let relay = self.hysteresis.next_state(relay_before, reading.current_amps);

        let power_w = reading.power_w();
        let mut energy = EnergyAccumulator::with_total(state.cumulative_energy_wh);
        let cumulative_energy_wh = energy.integrate(power_w, self.sample.dt());

        let events = self.thresholds.detect(
            relay_before,
            relay,
            reading.current_amps,
            state.prev_current,
            reading.voltage_sensor_voltage,
            state.prev_voltage_sensor,
        );

        let next = ControllerState {
            actuator_on: relay.is_on(),
            prev_current: reading.current_amps,
            prev_voltage_sensor: reading.voltage_sensor_voltage,
            cumulative_energy_wh,
        };

        let outcome = TickOutcome {
            reading,
            relay_before,
            relay,
            power_w,
            cumulative_energy_wh,
            events,
        };

        (next, outcome)
    }
}
