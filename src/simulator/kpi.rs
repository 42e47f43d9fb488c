//! Simulation quality metrics (KPIs).
//!
//! Summarizes a completed run across all processes.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | Avg Turnaround | Mean of completion - arrival |
//! | Avg Waiting | Mean of turnaround - burst |
//! | Max Waiting | Largest single wait |
//! | CPU Utilization | busy time / makespan |
//! | Throughput | processes / makespan |

use serde::{Deserialize, Serialize};

use crate::models::{CompletedProcess, Timeline};

/// Run performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationKpi {
    /// Number of processes simulated.
    pub process_count: usize,
    /// Latest completion time.
    pub makespan: i64,
    /// Sum of turnaround times.
    pub total_turnaround: i64,
    /// Sum of waiting times.
    pub total_waiting: i64,
    /// Mean turnaround.
    pub avg_turnaround: f64,
    /// Mean waiting.
    pub avg_waiting: f64,
    /// Largest waiting time of any single process.
    pub max_waiting: i64,
    /// Fraction of `[0, makespan)` the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Number of switches between distinct processes.
    pub context_switches: usize,
}

impl SimulationKpi {
    /// Computes KPIs from completed processes and the run's timeline.
    pub fn calculate(processes: &[CompletedProcess], timeline: &Timeline) -> Self {
        let process_count = processes.len();
        let makespan = processes.iter().map(|p| p.completion).max().unwrap_or(0);
        let total_turnaround = saturating_total(processes.iter().map(|p| p.turnaround));
        let total_waiting = saturating_total(processes.iter().map(|p| p.waiting));
        let max_waiting = processes.iter().map(|p| p.waiting).max().unwrap_or(0);

        // From f64 sums: the i64 totals may have saturated.
        let (avg_turnaround, avg_waiting) = if process_count == 0 {
            (0.0, 0.0)
        } else {
            let n = process_count as f64;
            (
                processes.iter().map(|p| p.turnaround as f64).sum::<f64>() / n,
                processes.iter().map(|p| p.waiting as f64).sum::<f64>() / n,
            )
        };

        let (cpu_utilization, throughput) = if makespan <= 0 {
            (0.0, 0.0)
        } else {
            (
                timeline.busy_time() as f64 / makespan as f64,
                process_count as f64 / makespan as f64,
            )
        };

        Self {
            process_count,
            makespan,
            total_turnaround,
            total_waiting,
            avg_turnaround,
            avg_waiting,
            max_waiting,
            cpu_utilization,
            throughput,
            context_switches: timeline.context_switches(),
        }
    }
}

/// Sum that clamps at `i64::MAX` instead of overflowing.
fn saturating_total(values: impl Iterator<Item = i64>) -> i64 {
    values.fold(0, i64::saturating_add)
}
