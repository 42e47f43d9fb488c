//! Scheduling policy selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;

/// The scheduling policy a simulation runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// First-come, first-served.
    Fcfs,
    /// Non-preemptive shortest job first.
    Sjf,
    /// Shortest remaining time first (preemptive SJF).
    Srtf,
    /// Round-robin; requires a quantum.
    RoundRobin,
}

impl Policy {
    /// All policies, in presentation order.
    pub const ALL: [Policy; 4] = [Policy::Fcfs, Policy::RoundRobin, Policy::Sjf, Policy::Srtf];

    /// Short label (e.g., "FCFS", "RR").
    pub fn label(self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sjf => "SJF",
            Policy::Srtf => "SRTF",
            Policy::RoundRobin => "RR",
        }
    }

    /// Policy description.
    pub fn description(self) -> &'static str {
        match self {
            Policy::Fcfs => "First-Come, First-Served",
            Policy::Sjf => "Shortest Job First",
            Policy::Srtf => "Shortest Remaining Time First",
            Policy::RoundRobin => "Round Robin",
        }
    }

    /// Whether the policy needs a time quantum.
    pub fn requires_quantum(self) -> bool {
        matches!(self, Policy::RoundRobin)
    }

    /// Whether the running process can lose the CPU before finishing.
    pub fn is_preemptive(self) -> bool {
        matches!(self, Policy::Srtf | Policy::RoundRobin)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Policy {
    type Err = SimulationError;

    /// Accepts `FCFS`, `SJF`, `SRTF` (or `PSJF`) and `RR` (or `round_robin`),
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FCFS" => Ok(Policy::Fcfs),
            "SJF" => Ok(Policy::Sjf),
            "SRTF" | "PSJF" => Ok(Policy::Srtf),
            "RR" | "ROUND_ROBIN" | "ROUNDROBIN" => Ok(Policy::RoundRobin),
            other => Err(SimulationError::InvalidParameter {
                name: "policy",
                message: format!("unknown policy `{other}` (expected FCFS, SJF, SRTF, PSJF or RR)"),
            }),
        }
    }
}
