//! Control logic for the energy meter.
//!
//! This crate holds everything that happens between a raw ADC sample and the
//! values that end up in a log record. It performs no I/O: adapters live in
//! `em-io` and the loop that drives them lives in `em-app`.
//!
//! # Pipeline
//!
//! - **Calibration**: raw 10-bit codes to sensor voltages, ACS712 voltage to amps
//! - **Hysteresis**: dual-threshold relay decision with a dead band
//! - **Energy**: rectangular integration of `V × I` into watt-hours
//! - **Events**: relay change, current spike, voltage fluctuation flags
//! - **Controller**: one pure `step` per tick over an explicit state value

pub mod calibration;
pub mod controller;
pub mod energy;
pub mod error;
pub mod events;
pub mod hysteresis;
pub mod reading;
pub mod sampled;

pub use calibration::{Acs712Calibration, convert_to_voltage};
pub use controller::{Controller, ControllerState, TickOutcome};
pub use energy::EnergyAccumulator;
pub use error::{ControlError, ControlResult};
pub use events::{EventThresholds, TickEvents};
pub use hysteresis::{HysteresisConfig, RelayState};
pub use reading::{Reading, Sample};
pub use sampled::SampleConfig;
