//! Ports - traits the sampling loop drives.
//!
//! The loop owns exactly one reader and one actuator for its whole lifetime.
//! Neither trait retries; a returned error means the tick failed.

use em_core::{AdcChannel, RawSample};

use crate::error::IoResult;

/// Source of raw analog samples.
pub trait ChannelReader {
    /// Perform one conversion on `channel`.
    fn read_channel(&mut self, channel: AdcChannel) -> IoResult<RawSample>;

    /// Release the bus. Reads after this fail with `IoError::BusClosed`.
    ///
    /// Closing twice is not an error.
    fn close(&mut self) -> IoResult<()>;

    fn is_open(&self) -> bool;
}

/// Binary output driver.
pub trait Actuator {
    /// Drive the output. Idempotent: setting the current state again is a no-op
    /// for the hardware and never an error by itself.
    fn set(&mut self, on: bool) -> IoResult<()>;

    /// Last state successfully driven.
    fn is_on(&self) -> bool;
}
