use crate::EmError;

/// Floating point type used throughout system
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, EmError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(EmError::NonFinite { what, value: v })
    }
}

/// Seconds per hour, for W·s → Wh conversion.
pub const SECONDS_PER_HOUR: Real = 3600.0;
