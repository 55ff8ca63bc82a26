//! CSV log file.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::record::{LogRecord, RecordSink, TIMESTAMP_FORMAT};
use crate::{ResultsError, ResultsResult};

/// Header row, written once when the file is created.
pub const HEADER: &str = "Timestamp,Current Sensor Voltage (V),Current (A),\
Voltage Sensor Output (V),Relay State,Power (W),Cumulative Energy (Wh),\
Relay Changed,Current Spike,Voltage Fluctuation";

/// Row terminator. CRLF, as spreadsheet-oriented CSV writers emit.
pub const LINE_END: &str = "\r\n";

fn flag(b: bool) -> &'static str {
    if b { "True" } else { "False" }
}

/// Render one record as a CSV line (no trailing newline).
///
/// Voltages, current and power use 2 decimals, energy uses 4.
pub fn format_record(r: &LogRecord) -> String {
    format!(
        "{},{:.2},{:.2},{:.2},{},{:.2},{:.4},{},{},{}",
        r.timestamp.format(TIMESTAMP_FORMAT),
        r.current_sensor_voltage,
        r.current_amps,
        r.voltage_sensor_voltage,
        r.actuator_state.as_str(),
        r.power_w,
        r.cumulative_energy_wh,
        flag(r.actuator_changed),
        flag(r.current_spike),
        flag(r.voltage_fluctuation),
    )
}

/// CSV file sink. Every append is flushed and synced before returning.
pub struct CsvLogWriter {
    path: PathBuf,
    /// `None` once closed.
    out: Option<BufWriter<File>>,
    rows: u64,
}

impl CsvLogWriter {
    /// Create (or truncate) `path` and write the header row.
    pub fn create(path: impl AsRef<Path>) -> ResultsResult<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;
        let mut out = BufWriter::new(file);
        write!(out, "{HEADER}{LINE_END}")?;
        out.flush()?;
        debug!(path = %path.display(), "log file created");
        Ok(Self {
            path,
            out: Some(out),
            rows: 0,
        })
    }

    /// Data rows written so far.
    pub fn rows(&self) -> u64 {
        self.rows
    }
}

impl RecordSink for CsvLogWriter {
    fn append(&mut self, record: &LogRecord) -> ResultsResult<()> {
        let out = self.out.as_mut().ok_or(ResultsError::Closed)?;
        write!(out, "{}{LINE_END}", format_record(record))?;
        out.flush()?;
        out.get_ref().sync_data()?;
        self.rows += 1;
        Ok(())
    }

    fn close(&mut self) -> ResultsResult<()> {
        if let Some(mut out) = self.out.take() {
            out.flush()?;
            out.get_ref().sync_all()?;
            debug!(path = %self.path.display(), rows = self.rows, "log file closed");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use em_controls::RelayState;

    fn record() -> LogRecord {
        LogRecord {
            timestamp: NaiveDate::from_ymd_opt(2025, 3, 14)
                .unwrap()
                .and_hms_opt(9, 5, 7)
                .unwrap(),
            current_sensor_voltage: 2.5338,
            current_amps: 0.5121,
            voltage_sensor_voltage: 1.0,
            actuator_state: RelayState::On,
            power_w: 0.5121,
            cumulative_energy_wh: 0.000142,
            actuator_changed: true,
            current_spike: true,
            voltage_fluctuation: false,
        }
    }

    #[test]
    fn header_has_ten_columns() {
        assert_eq!(HEADER.split(',').count(), 10);
        assert!(HEADER.starts_with("Timestamp,Current Sensor Voltage (V)"));
        assert!(HEADER.ends_with("Current Spike,Voltage Fluctuation"));
    }

    #[test]
    fn record_formatting() {
        assert_eq!(
            format_record(&record()),
            "2025-03-14 09:05:07,2.53,0.51,1.00,ON,0.51,0.0001,True,True,False"
        );
    }

    #[test]
    fn negative_values_keep_sign() {
        let mut r = record();
        r.current_amps = -0.256;
        r.power_w = -0.256;
        r.cumulative_energy_wh = -0.00005;
        r.actuator_state = RelayState::Off;
        let line = format_record(&r);
        assert!(line.contains(",-0.26,"));
        assert!(line.contains(",OFF,"));
        assert!(line.contains(",-0.0001,") || line.contains(",-0.0000,"));
    }
}
