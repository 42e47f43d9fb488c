//! Process record model.
//!
//! A process is the unit of work the simulated CPU executes. The record
//! carries immutable input fields (`id`, `arrival`, `burst`) and the mutable
//! simulation state (`remaining`, `completion`) owned by one engine run.
//!
//! # Time Representation
//! All times are integer time units relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// Externally assigned process identifier, unique within one run.
pub type ProcessId = i64;

/// Validated input description of a process.
///
/// This is what callers hand to the simulator; engines work on
/// [`Process`] records built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Time unit at which the process becomes eligible to run.
    pub arrival: i64,
    /// Total CPU time required.
    pub burst: i64,
}

impl ProcessSpec {
    /// Creates a process description.
    pub fn new(id: ProcessId, arrival: i64, burst: i64) -> Self {
        Self { id, arrival, burst }
    }
}

/// A process record during simulation.
///
/// # Invariants
/// - `0 <= remaining <= burst`
/// - `completion` is set exactly once, when `remaining` first reaches 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Arrival time.
    pub arrival: i64,
    /// Original burst (immutable).
    pub burst: i64,
    /// CPU time still required.
    pub remaining: i64,
    /// Time unit at which `remaining` reached 0. `None` while incomplete.
    pub completion: Option<i64>,
}

impl Process {
    /// Creates a fresh record with `remaining = burst` and no completion.
    pub fn new(id: ProcessId, arrival: i64, burst: i64) -> Self {
        Self {
            id,
            arrival,
            burst,
            remaining: burst,
            completion: None,
        }
    }

    /// Builds a fresh record from an input description.
    pub fn from_spec(spec: &ProcessSpec) -> Self {
        Self::new(spec.id, spec.arrival, spec.burst)
    }

    /// Whether the process has finished executing.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.completion.is_some()
    }

    /// Whether the process is eligible to run at `clock`.
    #[inline]
    pub fn has_arrived(&self, clock: i64) -> bool {
        self.arrival <= clock
    }

    /// Executes the process for `elapsed` units, ending at time `now`.
    ///
    /// Clamps to the remaining burst and stamps `completion = now` when the
    /// remaining time reaches zero. Returns the time actually consumed.
    pub fn run_for(&mut self, elapsed: i64, now: i64) -> i64 {
        let used = elapsed.clamp(0, self.remaining);
        self.remaining -= used;
        if self.remaining == 0 && self.completion.is_none() {
            self.completion = Some(now);
        }
        used
    }

    /// Non-preemptive selection key: `(burst, arrival, id)`.
    #[inline]
    pub fn shortest_job_key(&self) -> (i64, i64, ProcessId) {
        (self.burst, self.arrival, self.id)
    }

    /// Preemptive selection key: `(remaining, arrival, id)`.
    #[inline]
    pub fn shortest_remaining_key(&self) -> (i64, i64, ProcessId) {
        (self.remaining, self.arrival, self.id)
    }

    /// Arrival-order key: `(arrival, id)`.
    #[inline]
    pub fn arrival_key(&self) -> (i64, ProcessId) {
        (self.arrival, self.id)
    }
}

impl From<ProcessSpec> for Process {
    fn from(spec: ProcessSpec) -> Self {
        Self::from_spec(&spec)
    }
}
