//! Execution timeline (Gantt trace).
//!
//! Records the intervals during which the simulated CPU ran each process.
//! Gaps between slices are idle time.

use serde::{Deserialize, Serialize};

use super::ProcessId;

/// A contiguous interval of CPU time given to one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Process that held the CPU.
    pub process_id: ProcessId,
    /// Start time (inclusive).
    pub start: i64,
    /// End time (exclusive).
    pub end: i64,
}

impl Slice {
    /// Length of the slice.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Ordered list of busy slices produced by one engine run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Slices in chronological order.
    pub slices: Vec<Slice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a busy interval.
    ///
    /// Empty intervals are ignored; an interval that continues the previous
    /// slice of the same process is merged into it.
    pub fn record(&mut self, process_id: ProcessId, start: i64, end: i64) {
        if end <= start {
            return;
        }
        if let Some(last) = self.slices.last_mut() {
            if last.process_id == process_id && last.end == start {
                last.end = end;
                return;
            }
        }
        self.slices.push(Slice {
            process_id,
            start,
            end,
        });
    }

    /// Total time the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(Slice::duration).sum()
    }

    /// Time at which the last slice ends (0 for an empty timeline).
    pub fn end_time(&self) -> i64 {
        self.slices.last().map(|s| s.end).unwrap_or(0)
    }

    /// Idle time between t=0 and [`end_time`](Self::end_time).
    pub fn idle_time(&self) -> i64 {
        self.end_time() - self.busy_time()
    }

    /// Number of times the CPU switched from one process to another.
    pub fn context_switches(&self) -> usize {
        self.slices
            .windows(2)
            .filter(|w| w[0].process_id != w[1].process_id)
            .count()
    }

    /// Slices belonging to one process.
    pub fn slices_for(&self, process_id: ProcessId) -> impl Iterator<Item = &Slice> {
        self.slices
            .iter()
            .filter(move |s| s.process_id == process_id)
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether no slice has been recorded.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}
