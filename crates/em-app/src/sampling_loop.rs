//! The sampling-control loop.
//!
//! One tick: read both channels, step the controller, drive the relay on a
//! transition, append the record, commit state. Any failure ends the run;
//! there are no retries. On every exit path the relay is commanded off, the
//! bus is released and the sink is closed, exactly once.

use chrono::{Local, NaiveDateTime};
use em_controls::{Controller, ControllerState, Sample};
use em_core::AdcChannel;
use em_io::{Actuator, ChannelReader};
use em_results::{LogRecord, RecordSink};
use tracing::{error, info, warn};

use crate::error::AppResult;
use crate::summary::{RunSummary, ShutdownReason};
use crate::wait::{TickWaiter, Wake};

/// Loop lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    Running,
    ShuttingDown,
    Stopped,
}

/// Result of a single tick.
#[derive(Debug)]
pub enum TickStatus {
    Continue,
    Fault(crate::error::AppError),
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Owns the controller state and every hardware handle for the process
/// lifetime.
pub struct SamplingLoop<R, A, S> {
    reader: R,
    actuator: A,
    sink: S,
    controller: Controller,
    state: ControllerState,
    phase: LoopPhase,
    reason: Option<ShutdownReason>,
    ticks: u64,
    relay_switches: u64,
    clock: fn() -> NaiveDateTime,
}

impl<R, A, S> SamplingLoop<R, A, S>
where
    R: ChannelReader,
    A: Actuator,
    S: RecordSink,
{
    pub fn new(reader: R, actuator: A, sink: S, controller: Controller) -> Self {
        Self {
            reader,
            actuator,
            sink,
            controller,
            state: ControllerState::default(),
            phase: LoopPhase::Running,
            reason: None,
            ticks: 0,
            relay_switches: 0,
            clock: local_now,
        }
    }

    /// Replace the timestamp source.
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Run one tick.
    pub fn tick(&mut self) -> TickStatus {
        match self.try_tick() {
            Ok(()) => TickStatus::Continue,
            Err(e) => TickStatus::Fault(e),
        }
    }

    fn try_tick(&mut self) -> AppResult<()> {
        let sample = Sample {
            raw_current: self.reader.read_channel(AdcChannel::CURRENT)?,
            raw_voltage: self.reader.read_channel(AdcChannel::VOLTAGE)?,
        };

        let (next, outcome) = self.controller.step(&self.state, sample);

        // The relay must settle before the record that reports it.
        if let Some(relay) = outcome.transition() {
            self.actuator.set(relay.is_on())?;
            self.relay_switches += 1;
            info!(
                relay = %relay,
                current_a = outcome.reading.current_amps,
                "relay switched"
            );
        }

        let r = &outcome.reading;
        info!(
            "Current Sensor Voltage: {:.2} V → Current: {:.2} A",
            r.current_sensor_voltage, r.current_amps
        );
        info!("Voltage Sensor Output: {:.2} V", r.voltage_sensor_voltage);

        let record = LogRecord::from_outcome((self.clock)(), &outcome);
        self.sink.append(&record)?;

        self.state = next;
        self.ticks += 1;
        Ok(())
    }

    /// Drive the loop until a stop request or a fault, then release
    /// everything.
    pub fn run(&mut self, waiter: &mut impl TickWaiter) -> RunSummary {
        if self.phase == LoopPhase::Running {
            info!("Reading current and voltage...");
        }
        loop {
            match self.phase {
                LoopPhase::Running => {
                    let reason = match self.tick() {
                        TickStatus::Continue => match waiter.wait() {
                            Wake::Tick => continue,
                            Wake::Stop => ShutdownReason::Signaled,
                        },
                        TickStatus::Fault(e) => {
                            error!(error = %e, tick = self.ticks, "tick failed");
                            ShutdownReason::Fault(e)
                        }
                    };
                    self.reason = Some(reason);
                    self.phase = LoopPhase::ShuttingDown;
                }
                LoopPhase::ShuttingDown => {
                    self.release();
                    self.phase = LoopPhase::Stopped;
                }
                LoopPhase::Stopped => break,
            }
        }

        let summary = RunSummary {
            ticks: self.ticks,
            relay_switches: self.relay_switches,
            cumulative_energy_wh: self.state.cumulative_energy_wh,
            reason: self.reason.take().unwrap_or(ShutdownReason::Signaled),
        };
        info!(
            ticks = summary.ticks,
            relay_switches = summary.relay_switches,
            energy_wh = summary.cumulative_energy_wh,
            "sampling loop stopped"
        );
        summary
    }

    /// Safe-state sequence. Failures are logged, never propagated, so every
    /// step is attempted.
    fn release(&mut self) {
        if let Err(e) = self.actuator.set(false) {
            warn!(error = %e, "could not switch relay off");
        }
        if let Err(e) = self.reader.close() {
            warn!(error = %e, "could not release ADC bus");
        }
        if let Err(e) = self.sink.close() {
            warn!(error = %e, "could not close log");
        }
    }
}
