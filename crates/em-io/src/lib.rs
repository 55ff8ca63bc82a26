//! Hardware boundary for the energy meter.
//!
//! # Ports
//!
//! - [`ChannelReader`]: one 10-bit conversion from an ADC channel
//! - [`Actuator`]: binary output (the relay)
//!
//! # Adapters
//!
//! - [`Mcp3008`]: MCP3008 ADC on the Raspberry Pi SPI bus
//! - [`GpioRelay`]: relay module on a BCM GPIO pin
//! - [`SimulatedAdc`] / [`SimulatedRelay`]: bench hardware for running
//!   off-device and for tests, with fault injection
//!
//! Both ports fail with [`IoError`]; the loop treats every failure as fatal.

pub mod adapters;
pub mod error;
pub mod ports;

pub use adapters::{GpioRelay, Mcp3008, SimulatedAdc, SimulatedRelay};
pub use error::{IoError, IoResult};
pub use ports::{Actuator, ChannelReader};
