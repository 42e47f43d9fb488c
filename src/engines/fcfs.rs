//! First-come, first-served.
//!
//! Non-preemptive. Processes run to completion in `(arrival, id)` order;
//! the clock jumps forward when the next process has not arrived yet.
//!
//! # Complexity
//! O(n log n), one pass after sorting.

use super::EngineRun;
use crate::models::{Process, Timeline};

/// Runs FCFS over an owned working copy of the processes.
///
/// Empty input yields an empty run.
pub fn run(mut processes: Vec<Process>) -> EngineRun {
    processes.sort_by_key(Process::arrival_key);

    let mut timeline = Timeline::new();
    let mut clock = 0;

    for p in &mut processes {
        if p.arrival > clock {
            log::trace!("t={clock}: idle until {}", p.arrival);
        }
        clock = clock.max(p.arrival);
        let start = clock;
        clock += p.remaining;
        p.run_for(p.remaining, clock);
        timeline.record(p.id, start, clock);
        log::trace!("t={start}: process {} runs to {clock}", p.id);
    }

    EngineRun {
        dispatches: processes.len(),
        processes,
        timeline,
    }
}
