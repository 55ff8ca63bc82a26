//! Sensor calibration.
//!
//! Both transducers feed the same 10-bit ADC referenced to `V_REF`. The
//! current channel additionally maps through the ACS712 transfer function:
//! `amps = (v - zero_current) / sensitivity`.

use em_core::{RawSample, ensure_finite};
use em_core::constants::{ACS712_SENSITIVITY, ACS712_ZERO_CURRENT, V_REF};
use serde::{Deserialize, Serialize};

use crate::error::{ControlError, ControlResult};

/// Convert a raw ADC code to volts against `V_REF`.
///
/// The code is normalized first so full scale maps to exactly `V_REF`.
#[inline]
pub fn convert_to_voltage(raw: RawSample) -> f64 {
    raw.value() as f64 / RawSample::MAX as f64 * V_REF
}

/// Linear ACS712 calibration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Acs712Calibration {
    /// Sensor output at zero current (V).
    pub zero_current_v: f64,
    /// Sensitivity (V/A).
    pub sensitivity_v_per_a: f64,
}

impl Acs712Calibration {
    pub fn new(zero_current_v: f64, sensitivity_v_per_a: f64) -> ControlResult<Self> {
        if !sensitivity_v_per_a.is_finite() || sensitivity_v_per_a <= 0.0 {
            return Err(ControlError::InvalidArg {
                what: "sensitivity must be positive",
            });
        }
        let zero_current_v = ensure_finite(zero_current_v, "zero current voltage")?;
        Ok(Self {
            zero_current_v,
            sensitivity_v_per_a,
        })
    }

    /// Current through the sensor given its output voltage.
    #[inline]
    pub fn amps(&self, sensor_voltage: f64) -> f64 {
        (sensor_voltage - self.zero_current_v) / self.sensitivity_v_per_a
    }
}

impl Default for Acs712Calibration {
    fn default() -> Self {
        Self {
            zero_current_v: ACS712_ZERO_CURRENT,
            sensitivity_v_per_a: ACS712_SENSITIVITY,
        }
    }
}
