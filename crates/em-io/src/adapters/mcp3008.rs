//! MCP3008 8-channel 10-bit ADC on SPI.
//!
//! Single-ended conversion is one 3-byte full-duplex transfer:
//!
//! ```text
//! tx: 0000_0001  1CCC_0000  xxxx_xxxx     start bit, SGL=1, channel
//! rx: xxxx_xxxx  xxxx_x0BB  BBBB_BBBB     null bit, 10 data bits
//! ```

use em_core::constants::SPI_CLOCK_HZ;
use em_core::{AdcChannel, RawSample};
use rppal::spi::{Bus, Mode, SlaveSelect, Spi};
use tracing::debug;

use crate::error::{IoError, IoResult};
use crate::ports::ChannelReader;

const FRAME_LEN: usize = 3;

/// Transmit frame selecting a single-ended conversion on `channel`.
pub fn command_frame(channel: AdcChannel) -> [u8; FRAME_LEN] {
    [0x01, (0x08 | channel.index()) << 4, 0x00]
}

/// Extract the 10-bit result from a receive frame.
pub fn decode_frame(rx: &[u8; FRAME_LEN]) -> IoResult<RawSample> {
    let value = (u16::from(rx[1] & 0x03) << 8) | u16::from(rx[2]);
    Ok(RawSample::new(value)?)
}

/// MCP3008 on the Raspberry Pi SPI bus.
pub struct Mcp3008 {
    /// `None` once the bus has been released.
    spi: Option<Spi>,
}

impl Mcp3008 {
    /// Open SPI0 / CE0 at the compiled-in clock, mode 0.
    pub fn open() -> IoResult<Self> {
        Self::open_on(Bus::Spi0, SlaveSelect::Ss0, SPI_CLOCK_HZ)
    }

    pub fn open_on(bus: Bus, slave_select: SlaveSelect, clock_hz: u32) -> IoResult<Self> {
        let spi = Spi::new(bus, slave_select, clock_hz, Mode::Mode0)?;
        debug!(?bus, ?slave_select, clock_hz, "opened MCP3008");
        Ok(Self { spi: Some(spi) })
    }
}

impl ChannelReader for Mcp3008 {
    fn read_channel(&mut self, channel: AdcChannel) -> IoResult<RawSample> {
        let spi = self.spi.as_ref().ok_or(IoError::BusClosed)?;
        let tx = command_frame(channel);
        let mut rx = [0_u8; FRAME_LEN];
        let got = spi.transfer(&mut rx, &tx)?;
        if got != FRAME_LEN {
            return Err(IoError::ShortTransfer {
                channel,
                got,
                expected: FRAME_LEN,
            });
        }
        decode_frame(&rx)
    }

    fn close(&mut self) -> IoResult<()> {
        // Dropping the handle closes the spidev file descriptor.
        if self.spi.take().is_some() {
            debug!("closed MCP3008 SPI bus");
        }
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.spi.is_some()
    }
}
