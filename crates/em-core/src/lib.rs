//! em-core: stable foundation for the energy meter.
//!
//! Contains:
//! - adc (10-bit channel/sample newtypes)
//! - constants (compiled-in calibration, thresholds and hardware wiring)
//! - units (uom energy type + constructor)
//! - numeric (Real + float helpers)
//! - error (shared error types)

pub mod adc;
pub mod constants;
pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use adc::{AdcChannel, RawSample};
pub use error::{EmError, EmResult};
pub use numeric::*;
pub use units::*;
