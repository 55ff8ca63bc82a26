//! Adapters - concrete implementations of ports
//!
//! - **mcp3008**: MCP3008 over SPI via rppal
//! - **relay**: relay on a GPIO output via rppal
//! - **sim**: scripted/bench hardware

pub mod mcp3008;
pub mod relay;
pub mod sim;

pub use mcp3008::Mcp3008;
pub use relay::GpioRelay;
pub use sim::{SimulatedAdc, SimulatedRelay};
