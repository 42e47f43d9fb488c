//! Random workload generation.
//!
//! Produces valid process lists for experiments and randomized checks.
//! Any `rand::Rng` can drive it; seed a `SmallRng` for reproducible runs.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::ProcessSpec;

/// Shape of a generated workload.
///
/// # Example
/// ```
/// use cpu_schedsim::workload::WorkloadGenerator;
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let processes = WorkloadGenerator::new(5).generate(&mut rng);
/// assert_eq!(processes.len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// Number of processes (IDs `1..=count`).
    pub count: usize,
    /// Latest possible arrival.
    pub max_arrival: i64,
    /// Longest possible burst.
    pub max_burst: i64,
}

impl WorkloadGenerator {
    /// Creates a generator with arrivals in `0..=20` and bursts in `1..=10`.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 20,
            max_burst: 10,
        }
    }

    /// Sets the latest possible arrival (clamped to >= 0).
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the longest possible burst (clamped to >= 1).
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst.max(1);
        self
    }

    /// Generates a process list in random arrival order.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<ProcessSpec> {
        (1..=self.count)
            .map(|id| {
                ProcessSpec::new(
                    id as i64,
                    rng.random_range(0..=self.max_arrival),
                    rng.random_range(1..=self.max_burst),
                )
            })
            .collect()
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self::new(8)
    }
}
