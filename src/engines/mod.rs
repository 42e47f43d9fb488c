//! Scheduling engines.
//!
//! One engine per policy. Every engine takes an owned working copy of the
//! process list, mutates only that copy, and returns it with all completion
//! times set together with the timeline of what it executed.
//!
//! | Engine | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | [`fcfs`] | no | `(arrival, id)` |
//! | [`sjf`] | no | `(burst, arrival, id)` among arrived |
//! | [`srtf`] | yes, at arrivals | `(remaining, arrival, id)`, incumbent wins ties |
//! | [`round_robin`] | yes, per quantum | FIFO ready queue |
//!
//! All engines start the clock at t=0 and jump over idle gaps instead of
//! ticking through them.

pub mod fcfs;
pub mod round_robin;
pub mod sjf;
pub mod srtf;

pub use round_robin::Quantum;

use std::collections::VecDeque;

use crate::models::{Process, Timeline};

/// Output of one engine invocation.
#[derive(Debug, Clone, Default)]
pub struct EngineRun {
    /// Completed records, in completion order.
    pub processes: Vec<Process>,
    /// Busy slices executed by the CPU.
    pub timeline: Timeline,
    /// Number of times a process was handed the CPU.
    ///
    /// Unlike `timeline.len()`, a process that is dispatched again right
    /// after its own slice counts twice here.
    pub dispatches: usize,
}

impl EngineRun {
    /// Time at which the last process completed (0 if none ran).
    pub fn final_clock(&self) -> i64 {
        self.processes
            .iter()
            .filter_map(|p| p.completion)
            .max()
            .unwrap_or(0)
    }
}

/// Sorts processes into a not-yet-arrived queue ordered by `(arrival, id)`.
pub(crate) fn arrival_queue(mut processes: Vec<Process>) -> VecDeque<Process> {
    processes.sort_by_key(Process::arrival_key);
    processes.into()
}

/// Moves every process with `arrival <= clock` from `pending` to the back
/// of `ready`, preserving arrival order.
pub(crate) fn admit<C: Extend<Process>>(
    pending: &mut VecDeque<Process>,
    ready: &mut C,
    clock: i64,
) {
    while pending.front().is_some_and(|p| p.has_arrived(clock)) {
        if let Some(p) = pending.pop_front() {
            log::trace!("t={clock}: process {} arrives", p.id);
            ready.extend(std::iter::once(p));
        }
    }
}
