//! Compiled-in constants. There is no runtime configuration.

/// ADC reference voltage (V).
pub const V_REF: f64 = 3.3;

/// ACS712 output at zero current (V).
pub const ACS712_ZERO_CURRENT: f64 = 2.5;
/// ACS712 sensitivity (V/A), 66 mV/A for the 30 A module.
pub const ACS712_SENSITIVITY: f64 = 0.066;

/// Relay switches on above this current magnitude (A).
pub const ON_THRESHOLD: f64 = 0.08;
/// Relay switches off below this current magnitude (A).
pub const OFF_THRESHOLD: f64 = 0.04;

/// Tick-to-tick current change that counts as a spike (A).
pub const CURRENT_SPIKE_THRESHOLD: f64 = 0.1;
/// Tick-to-tick voltage sensor change that counts as a fluctuation (V).
pub const VOLTAGE_FLUCTUATION_THRESHOLD: f64 = 0.2;

/// Sampling period (s).
pub const TICK_INTERVAL_S: f64 = 1.0;

/// MCP3008 SPI clock (Hz).
pub const SPI_CLOCK_HZ: u32 = 1_350_000;
/// BCM pin driving the relay.
pub const RELAY_GPIO: u8 = 17;

/// Log file, truncated at startup.
pub const LOG_FILE_NAME: &str = "sensor_log1.csv";
