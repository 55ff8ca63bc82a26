//! What the loop reports when it stops.

use em_core::{Energy, wh};
use uom::fmt::DisplayStyle::Abbreviation;
use uom::si::energy::watt_hour;

use crate::error::AppError;

/// Why the loop left `Running`.
#[derive(Debug)]
pub enum ShutdownReason {
    /// External stop signal. Not an error.
    Signaled,
    /// A tick failed.
    Fault(AppError),
}

impl ShutdownReason {
    pub fn is_fault(&self) -> bool {
        matches!(self, ShutdownReason::Fault(_))
    }
}

/// Totals for one run of the loop.
#[derive(Debug)]
pub struct RunSummary {
    /// Ticks that completed and emitted a record.
    pub ticks: u64,
    pub relay_switches: u64,
    pub cumulative_energy_wh: f64,
    pub reason: ShutdownReason,
}

impl RunSummary {
    pub fn energy(&self) -> Energy {
        wh(self.cumulative_energy_wh)
    }

    /// Process exit status: zero for a signaled stop.
    pub fn exit_code(&self) -> i32 {
        if self.reason.is_fault() { 1 } else { 0 }
    }

    /// Energy total, e.g. `Energy delivered: 0.0123 W · h`.
    pub fn energy_line(&self) -> String {
        format!(
            "Energy delivered: {:.4}",
            self.energy().into_format_args(watt_hour, Abbreviation)
        )
    }

    /// Final user-facing line.
    pub fn status_line(&self) -> String {
        match &self.reason {
            ShutdownReason::Signaled => "Stopped by user.".to_string(),
            ShutdownReason::Fault(e) => format!("Stopped after fault: {e}"),
        }
    }
}
