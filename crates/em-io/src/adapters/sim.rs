//! Simulated hardware.
//!
//! [`SimulatedAdc`] replays per-channel scripts and [`SimulatedRelay`]
//! records every command it receives. Both can be told to fail on a given
//! operation so the shutdown path can be exercised without a Pi.

use em_core::{AdcChannel, RawSample};
use tracing::trace;

use crate::error::{IoError, IoResult};
use crate::ports::{Actuator, ChannelReader};

/// Values for one channel.
#[derive(Debug, Clone)]
struct ChannelScript {
    values: Vec<u16>,
    cursor: usize,
    /// Wrap around at the end instead of holding the last value.
    cycle: bool,
}

impl ChannelScript {
    fn new(values: Vec<u16>, cycle: bool) -> Self {
        Self {
            values,
            cursor: 0,
            cycle,
        }
    }

    fn advance(&mut self) -> u16 {
        let Some(&last) = self.values.last() else {
            return 0;
        };
        let value = self.values.get(self.cursor).copied().unwrap_or(last);
        self.cursor += 1;
        if self.cycle && self.cursor >= self.values.len() {
            self.cursor = 0;
        }
        value
    }
}

/// Scripted ADC for the current and voltage channels.
///
/// Other channels read as zero. Once a non-cycling script runs out, the last
/// value repeats.
#[derive(Debug, Clone)]
pub struct SimulatedAdc {
    current: ChannelScript,
    voltage: ChannelScript,
    reads: usize,
    fail_on_read: Option<usize>,
    open: bool,
}

impl SimulatedAdc {
    pub fn scripted(current: Vec<u16>, voltage: Vec<u16>) -> Self {
        Self {
            current: ChannelScript::new(current, false),
            voltage: ChannelScript::new(voltage, false),
            reads: 0,
            fail_on_read: None,
            open: true,
        }
    }

    /// Constant codes on both channels.
    pub fn constant(current: u16, voltage: u16) -> Self {
        Self::scripted(vec![current], vec![voltage])
    }

    /// Repeating bench profile: a load that is off for 15 ticks, then draws
    /// roughly 0.7 A for 15 ticks, with a count of jitter on both channels.
    pub fn bench() -> Self {
        // 775 counts is the ACS712 zero point (2.5 V), 310 counts is ~1.0 V.
        let mut current = Vec::with_capacity(30);
        let mut voltage = Vec::with_capacity(30);
        for i in 0..30_u16 {
            let jitter = i % 3;
            current.push(if i < 15 { 774 + jitter } else { 788 + jitter });
            voltage.push(309 + jitter);
        }
        Self {
            current: ChannelScript::new(current, true),
            voltage: ChannelScript::new(voltage, true),
            reads: 0,
            fail_on_read: None,
            open: true,
        }
    }

    /// Fail the `n`th read (0-based, counted across channels).
    pub fn fail_on_read(mut self, n: usize) -> Self {
        self.fail_on_read = Some(n);
        self
    }

    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl ChannelReader for SimulatedAdc {
    fn read_channel(&mut self, channel: AdcChannel) -> IoResult<RawSample> {
        if !self.open {
            return Err(IoError::BusClosed);
        }
        let n = self.reads;
        self.reads += 1;
        if self.fail_on_read == Some(n) {
            return Err(IoError::Injected {
                what: "adc read",
            });
        }
        let code = match channel {
            AdcChannel::CURRENT => self.current.advance(),
            AdcChannel::VOLTAGE => self.voltage.advance(),
            _ => 0,
        };
        trace!(%channel, code, "simulated conversion");
        Ok(RawSample::new(code)?)
    }

    fn close(&mut self) -> IoResult<()> {
        self.open = false;
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.open
    }
}

/// Relay that records commands.
#[derive(Debug, Clone, Default)]
pub struct SimulatedRelay {
    on: bool,
    commands: Vec<bool>,
    fail_on_command: Option<usize>,
}

impl SimulatedRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the `n`th command (0-based). Later commands succeed.
    pub fn fail_on_command(mut self, n: usize) -> Self {
        self.fail_on_command = Some(n);
        self
    }

    /// Every command attempted, including failed ones.
    pub fn commands(&self) -> &[bool] {
        &self.commands
    }
}

impl Actuator for SimulatedRelay {
    fn set(&mut self, on: bool) -> IoResult<()> {
        let n = self.commands.len();
        self.commands.push(on);
        if self.fail_on_command == Some(n) {
            return Err(IoError::Injected {
                what: "relay write",
            });
        }
        self.on = on;
        Ok(())
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
