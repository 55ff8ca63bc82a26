//! Waiting for the next tick.
//!
//! The wait is the loop's only suspension point and the only place a stop
//! request is observed.

use std::time::Duration;

/// Result of waiting for the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wake {
    /// The next tick is due.
    Tick,
    /// Stop was requested.
    Stop,
}

/// Blocks until the next tick deadline or a stop request.
pub trait TickWaiter {
    fn wait(&mut self) -> Wake;
}

/// Grants a fixed number of ticks, then asks the loop to stop.
///
/// Does not sleep; stands in for a signal arriving after `n` ticks.
#[derive(Debug, Clone)]
pub struct CountdownTicker {
    remaining: usize,
}

impl CountdownTicker {
    pub fn new(ticks: usize) -> Self {
        Self { remaining: ticks }
    }
}

impl TickWaiter for CountdownTicker {
    fn wait(&mut self) -> Wake {
        if self.remaining == 0 {
            return Wake::Stop;
        }
        self.remaining -= 1;
        Wake::Tick
    }
}

#[cfg(unix)]
pub use signal::SignalTicker;

#[cfg(unix)]
mod signal {
    use super::*;

    use tokio::runtime::{Builder, Runtime};
    use tokio::signal::unix::{Signal, SignalKind, signal};
    use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};
    use tracing::info;

    use crate::error::AppResult;

    /// Deadline wait on a current-thread tokio runtime, cancelled by SIGINT
    /// or SIGTERM.
    ///
    /// Signal handlers are installed at construction, so a signal delivered
    /// while a tick is being processed is seen by the next `wait`.
    pub struct SignalTicker {
        rt: Runtime,
        interval: Interval,
        sigint: Signal,
        sigterm: Signal,
    }

    impl SignalTicker {
        pub fn new(period: Duration) -> AppResult<Self> {
            let rt = Builder::new_current_thread().enable_all().build()?;
            let (interval, sigint, sigterm) = {
                let _guard = rt.enter();
                // First deadline is one period out: tick 0 runs before the first wait.
                let mut interval = interval_at(Instant::now() + period, period);
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                (
                    interval,
                    signal(SignalKind::interrupt())?,
                    signal(SignalKind::terminate())?,
                )
            };
            Ok(Self {
                rt,
                interval,
                sigint,
                sigterm,
            })
        }
    }

    impl TickWaiter for SignalTicker {
        fn wait(&mut self) -> Wake {
            let Self {
                rt,
                interval,
                sigint,
                sigterm,
            } = self;
            rt.block_on(async {
                tokio::select! {
                    biased;
                    _ = sigint.recv() => {
                        info!("interrupt received");
                        Wake::Stop
                    }
                    _ = sigterm.recv() => {
                        info!("terminate received");
                        Wake::Stop
                    }
                    _ = interval.tick() => Wake::Tick,
                }
            })
        }
    }

}
