//! Completed process model.
//!
//! Read-only result record produced by the metric deriver after an engine
//! run. Turnaround and waiting are always derived, never stored by engines.

use serde::{Deserialize, Serialize};

use super::ProcessId;

/// A process with all simulation fields filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedProcess {
    /// Process identifier.
    pub id: ProcessId,
    /// Arrival time.
    pub arrival: i64,
    /// Original burst.
    pub burst: i64,
    /// Completion time.
    pub completion: i64,
    /// `completion - arrival`.
    pub turnaround: i64,
    /// `turnaround - burst`.
    pub waiting: i64,
}

impl CompletedProcess {
    /// Share of its time in the system the process spent running
    /// (`burst / turnaround`, 0.0..=1.0).
    pub fn response_ratio(&self) -> f64 {
        if self.turnaround <= 0 {
            return 1.0;
        }
        self.burst as f64 / self.turnaround as f64
    }

    /// Slowdown relative to running alone (`turnaround / burst`, >= 1.0).
    pub fn penalty_ratio(&self) -> f64 {
        if self.burst <= 0 {
            return 1.0;
        }
        self.turnaround as f64 / self.burst as f64
    }
}
