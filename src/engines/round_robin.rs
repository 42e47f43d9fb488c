//! Round-robin.
//!
//! FIFO ready queue, fixed time slice. Before each dispatch every process
//! that has arrived is appended to the queue in `(arrival, id)` order.
//! Processes arriving during a slice are queued ahead of the process whose
//! slice just ended, which goes to the back if it still has work left.
//!
//! When the queue empties while processes are still pending, the clock
//! jumps to the next arrival, so the loop always makes progress.
//!
//! # Complexity
//! O(Σ ⌈burst / quantum⌉) dispatches.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{admit, arrival_queue, EngineRun};
use crate::error::{SimulationError, SimulationResult};
use crate::models::{Process, Timeline};

/// Round-robin time slice. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Quantum(i64);

impl Quantum {
    /// Creates a quantum, rejecting zero and negative values.
    pub fn new(units: i64) -> SimulationResult<Self> {
        if units > 0 {
            Ok(Self(units))
        } else {
            Err(SimulationError::InvalidParameter {
                name: "quantum",
                message: format!("must be positive, got {units}"),
            })
        }
    }

    /// Slice length in time units.
    #[inline]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for Quantum {
    type Error = SimulationError;

    fn try_from(units: i64) -> Result<Self, Self::Error> {
        Self::new(units)
    }
}

impl From<Quantum> for i64 {
    fn from(q: Quantum) -> Self {
        q.0
    }
}

impl fmt::Display for Quantum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Runs round-robin over an owned working copy of the processes.
pub fn run(processes: Vec<Process>, quantum: Quantum) -> EngineRun {
    let slice = quantum.get();
    let mut pending = arrival_queue(processes);
    let mut ready: VecDeque<Process> = VecDeque::with_capacity(pending.len());
    let mut done = Vec::with_capacity(pending.len());
    let mut timeline = Timeline::new();
    let mut clock = 0;
    let mut dispatches = 0;

    loop {
        admit(&mut pending, &mut ready, clock);

        let Some(mut p) = ready.pop_front() else {
            match pending.front() {
                Some(next) => {
                    log::trace!("t={clock}: idle until {}", next.arrival);
                    clock = clock.max(next.arrival);
                    continue;
                }
                None => break,
            }
        };

        let start = clock;
        let run = p.remaining.min(slice);
        dispatches += 1;
        clock += run;
        p.run_for(run, clock);
        timeline.record(p.id, start, clock);
        log::trace!("t={start}: process {} runs {run}, {} left", p.id, p.remaining);

        // Arrivals during the slice queue up before the preempted process.
        admit(&mut pending, &mut ready, clock);

        if p.is_complete() {
            done.push(p);
        } else {
            ready.push_back(p);
        }
    }

    EngineRun {
        processes: done,
        timeline,
        dispatches,
    }
}
