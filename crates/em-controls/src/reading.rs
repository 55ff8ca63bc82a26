//! Per-tick sample and the physical reading derived from it.

use em_core::RawSample;
use serde::{Deserialize, Serialize};

use crate::calibration::{Acs712Calibration, convert_to_voltage};

/// Raw codes from the two transducer channels, taken once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sample {
    pub raw_current: RawSample,
    pub raw_voltage: RawSample,
}

/// Physical values derived from a [`Sample`].
///
/// Invariant: `current_amps == calibration.amps(current_sensor_voltage)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// ACS712 output voltage (V).
    pub current_sensor_voltage: f64,
    /// ZMPT101B output voltage (V).
    pub voltage_sensor_voltage: f64,
    /// Load current (A), signed.
    pub current_amps: f64,
}

impl Reading {
    pub fn from_sample(sample: Sample, calibration: &Acs712Calibration) -> Self {
        let current_sensor_voltage = convert_to_voltage(sample.raw_current);
        let voltage_sensor_voltage = convert_to_voltage(sample.raw_voltage);
        Self {
            current_sensor_voltage,
            voltage_sensor_voltage,
            current_amps: calibration.amps(current_sensor_voltage),
        }
    }

    /// Instantaneous power (W).
    ///
    /// Uses the voltage channel reading, not the current sensor's own output.
    #[inline]
    pub fn power_w(&self) -> f64 {
        self.voltage_sensor_voltage * self.current_amps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(c: u16, v: u16) -> Sample {
        Sample {
            raw_current: RawSample::new(c).unwrap(),
            raw_voltage: RawSample::new(v).unwrap(),
        }
    }

    #[test]
    fn reading_respects_calibration() {
        let cal = Acs712Calibration::default();
        let r = Reading::from_sample(sample(800, 310), &cal);
        assert_eq!(r.current_amps, cal.amps(r.current_sensor_voltage));
        assert!((r.voltage_sensor_voltage - 310.0 * 3.3 / 1023.0).abs() < 1e-12);
    }

    #[test]
    fn power_uses_voltage_channel() {
        let r = Reading {
            current_sensor_voltage: 2.566,
            voltage_sensor_voltage: 1.2,
            current_amps: 1.0,
        };
        assert!((r.power_w() - 1.2).abs() < 1e-12);
    }
}
