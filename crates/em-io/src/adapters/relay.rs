//! Relay module on a GPIO output.

use em_core::constants::RELAY_GPIO;
use rppal::gpio::{Gpio, OutputPin};
use tracing::debug;

use crate::error::IoResult;
use crate::ports::Actuator;

/// Active-high relay. Starts de-energized.
pub struct GpioRelay {
    pin: OutputPin,
    on: bool,
}

impl GpioRelay {
    /// Claim the compiled-in relay pin.
    pub fn open() -> IoResult<Self> {
        Self::open_pin(RELAY_GPIO)
    }

    pub fn open_pin(bcm: u8) -> IoResult<Self> {
        let pin = Gpio::new()?.get(bcm)?.into_output_low();
        debug!(bcm, "relay pin claimed");
        Ok(Self { pin, on: false })
    }
}

impl Actuator for GpioRelay {
    fn set(&mut self, on: bool) -> IoResult<()> {
        if on {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
        self.on = on;
        Ok(())
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
