//! Shortest remaining time first (preemptive SJF).
//!
//! Event-driven: the clock advances straight to the next event, which is
//! either the next arrival or the running process's completion, whichever
//! comes first. Scheduling decisions are only re-taken at those instants.
//!
//! # Selection
//! Among arrived, incomplete processes the smallest `(remaining, arrival, id)`
//! runs. A process that was already running keeps the CPU when another
//! candidate merely ties it on `remaining`, so an arrival preempts only if
//! its burst is strictly shorter than what the incumbent has left.
//!
//! # Complexity
//! At most 2n events (n arrivals + n completions), each O(n): O(n²).

use std::collections::VecDeque;

use super::{admit, arrival_queue, EngineRun};
use crate::models::{Process, ProcessId, Timeline};

/// Runs SRTF over an owned working copy of the processes.
pub fn run(processes: Vec<Process>) -> EngineRun {
    let mut pending: VecDeque<Process> = arrival_queue(processes);
    let mut ready: Vec<Process> = Vec::with_capacity(pending.len());
    let mut done = Vec::with_capacity(pending.len());
    let mut timeline = Timeline::new();
    let mut clock = 0;
    let mut incumbent: Option<ProcessId> = None;
    let mut dispatches = 0;

    loop {
        admit(&mut pending, &mut ready, clock);

        if ready.is_empty() {
            match pending.front() {
                Some(next) => {
                    log::trace!("t={clock}: idle until {}", next.arrival);
                    clock = next.arrival;
                    continue;
                }
                None => break,
            }
        }

        let Some(idx) = select_running(&ready, incumbent) else {
            break;
        };

        let next_arrival = pending.front().map(|p| p.arrival);
        let (id, finished) = {
            let running = &mut ready[idx];
            if incumbent != Some(running.id) {
                dispatches += 1;
            }
            if let Some(prev) = incumbent.filter(|&prev| prev != running.id) {
                log::trace!(
                    "t={clock}: process {prev} preempted by {} (remaining {})",
                    running.id,
                    running.remaining
                );
            }

            let finish = clock + running.remaining;
            let event = match next_arrival {
                Some(arrival) if arrival < finish => arrival,
                _ => finish,
            };

            timeline.record(running.id, clock, event);
            running.run_for(event - clock, event);
            clock = event;
            (running.id, running.is_complete())
        };

        if finished {
            log::trace!("t={clock}: process {id} completes");
            done.push(ready.swap_remove(idx));
            incumbent = None;
        } else {
            incumbent = Some(id);
        }
    }

    EngineRun {
        processes: done,
        timeline,
        dispatches,
    }
}

/// Index of the process that should hold the CPU next.
///
/// The incumbent keeps the CPU unless a candidate has strictly less
/// remaining time.
fn select_running(ready: &[Process], incumbent: Option<ProcessId>) -> Option<usize> {
    let best = ready
        .iter()
        .enumerate()
        .min_by_key(|(_, p)| p.shortest_remaining_key())
        .map(|(i, _)| i)?;

    let kept = incumbent.and_then(|id| {
        ready
            .iter()
            .position(|p| p.id == id && p.remaining == ready[best].remaining)
    });

    Some(kept.unwrap_or(best))
}
