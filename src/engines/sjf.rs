//! Shortest job first (non-preemptive).
//!
//! At every decision point the candidate set is restricted to processes
//! that have arrived by the current clock. The shortest burst wins, ties
//! broken by `(arrival, id)`. When nothing has arrived the clock jumps to
//! the earliest pending arrival.
//!
//! # Complexity
//! O(n²): each decision scans the pool and completes one process.

use super::EngineRun;
use crate::models::{Process, Timeline};

/// Runs SJF over an owned working copy of the processes.
pub fn run(mut pool: Vec<Process>) -> EngineRun {
    let mut done = Vec::with_capacity(pool.len());
    let mut timeline = Timeline::new();
    let mut clock = 0;

    while let Some(earliest) = pool.iter().map(|p| p.arrival).min() {
        if earliest > clock {
            log::trace!("t={clock}: idle until {earliest}");
            clock = earliest;
        }

        let Some(idx) = select_shortest(&pool, clock) else {
            break;
        };
        let mut p = pool.swap_remove(idx);
        let start = clock;
        clock += p.remaining;
        p.run_for(p.remaining, clock);
        timeline.record(p.id, start, clock);
        log::trace!("t={start}: process {} (burst {}) runs to {clock}", p.id, p.burst);
        done.push(p);
    }

    EngineRun {
        dispatches: done.len(),
        processes: done,
        timeline,
    }
}

/// Index of the arrived process with the smallest `(burst, arrival, id)`.
fn select_shortest(pool: &[Process], clock: i64) -> Option<usize> {
    pool.iter()
        .enumerate()
        .filter(|(_, p)| p.has_arrived(clock))
        .min_by_key(|(_, p)| p.shortest_job_key())
        .map(|(i, _)| i)
}
