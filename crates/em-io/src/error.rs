//! Error types for hardware access.

use em_core::{AdcChannel, EmError};
use thiserror::Error;

pub type IoResult<T> = Result<T, IoError>;

/// Bus or actuator fault.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("SPI error: {0}")]
    Spi(#[from] rppal::spi::Error),

    #[error("GPIO error: {0}")]
    Gpio(#[from] rppal::gpio::Error),

    #[error("Short SPI transfer on {channel}: {got} of {expected} bytes")]
    ShortTransfer {
        channel: AdcChannel,
        got: usize,
        expected: usize,
    },

    #[error("Bus is closed")]
    BusClosed,

    #[error("Invalid sample: {0}")]
    InvalidSample(#[from] EmError),

    #[error("Injected fault: {what}")]
    Injected { what: &'static str },
}
