//! Log record type.

use chrono::NaiveDateTime;
use em_controls::{RelayState, TickOutcome};

use crate::ResultsResult;

/// `YYYY-MM-DD HH:MM:SS`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row of the time-series log. Built once per tick and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: NaiveDateTime,
    pub current_sensor_voltage: f64,
    pub current_amps: f64,
    pub voltage_sensor_voltage: f64,
    pub actuator_state: RelayState,
    pub power_w: f64,
    pub cumulative_energy_wh: f64,
    pub actuator_changed: bool,
    pub current_spike: bool,
    pub voltage_fluctuation: bool,
}

impl LogRecord {
    pub fn from_outcome(timestamp: NaiveDateTime, outcome: &TickOutcome) -> Self {
        Self {
            timestamp,
            current_sensor_voltage: outcome.reading.current_sensor_voltage,
            current_amps: outcome.reading.current_amps,
            voltage_sensor_voltage: outcome.reading.voltage_sensor_voltage,
            actuator_state: outcome.relay,
            power_w: outcome.power_w,
            cumulative_energy_wh: outcome.cumulative_energy_wh,
            actuator_changed: outcome.events.actuator_changed,
            current_spike: outcome.events.current_spike,
            voltage_fluctuation: outcome.events.voltage_fluctuation,
        }
    }
}

/// Append-only destination for log records.
///
/// `append` returns only after the record is durable, so a crash loses at
/// most the record in flight.
pub trait RecordSink {
    fn append(&mut self, record: &LogRecord) -> ResultsResult<()>;

    /// Flush and release the underlying store.
    fn close(&mut self) -> ResultsResult<()>;
}

/// In-memory sink, used when records only need to be inspected.
impl RecordSink for Vec<LogRecord> {
    fn append(&mut self, record: &LogRecord) -> ResultsResult<()> {
        self.push(record.clone());
        Ok(())
    }

    fn close(&mut self) -> ResultsResult<()> {
        Ok(())
    }
}
