//! Newtypes for the 10-bit, 8-channel ADC.

use core::fmt;

use crate::{EmError, EmResult};

/// Compact ADC channel index.
///
/// - `u8` is enough for the 8 single-ended inputs
/// - construction validates the range once so adapters never re-check it
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdcChannel(u8);

impl AdcChannel {
    /// Highest addressable channel.
    pub const MAX: u8 = 7;

    /// Current transducer input.
    pub const CURRENT: AdcChannel = AdcChannel(0);

    /// Voltage transducer input.
    pub const VOLTAGE: AdcChannel = AdcChannel(1);

    pub fn new(index: u8) -> EmResult<Self> {
        if index > Self::MAX {
            return Err(EmError::OutOfRange {
                what: "adc channel",
                value: index as u32,
                max: Self::MAX as u32,
            });
        }
        Ok(Self(index))
    }

    pub fn index(self) -> u8 {
        self.0
    }
}

impl fmt::Debug for AdcChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AdcChannel({})", self.0)
    }
}

impl fmt::Display for AdcChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CH{}", self.0)
    }
}

/// A raw 10-bit conversion result in `[0, 1023]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawSample(u16);

impl RawSample {
    /// Full-scale code.
    pub const MAX: u16 = 1023;

    pub fn new(value: u16) -> EmResult<Self> {
        if value > Self::MAX {
            return Err(EmError::OutOfRange {
                what: "adc sample",
                value: value as u32,
                max: Self::MAX as u32,
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u16 {
        self.0
    }
}
