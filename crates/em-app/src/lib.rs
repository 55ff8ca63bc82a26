//! Sampling-control loop for the energy meter.
//!
//! This crate wires the pure controller from `em-controls` to the hardware
//! ports in `em-io` and the record sink in `em-results`, and owns the loop's
//! lifecycle: `Running → ShuttingDown → Stopped`.

pub mod error;
pub mod sampling_loop;
pub mod summary;
pub mod wait;

pub use error::{AppError, AppResult};
pub use sampling_loop::{LoopPhase, SamplingLoop, TickStatus};
pub use summary::{RunSummary, ShutdownReason};
#[cfg(unix)]
pub use wait::SignalTicker;
pub use wait::{CountdownTicker, TickWaiter, Wake};
