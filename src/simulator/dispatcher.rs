//! Policy dispatcher.
//!
//! # Algorithm
//!
//! 1. Validate the process list and policy parameters; reject before any
//!    engine runs.
//! 2. Build a fresh working copy of the processes.
//! 3. Run exactly one engine for the selected policy.
//! 4. Derive turnaround and waiting for every completed record.
//! 5. Sort results by process ID for presentation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::kpi::SimulationKpi;
use super::metrics::derive_metrics;
use super::policy::Policy;
use crate::engines::{self, EngineRun, Quantum};
use crate::error::{SimulationError, SimulationResult};
use crate::models::{CompletedProcess, Process, ProcessId, ProcessSpec, Timeline};
use crate::validation::validate_processes;

/// Input container for a simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Policy to simulate.
    pub policy: Policy,
    /// Processes, in any order.
    pub processes: Vec<ProcessSpec>,
    /// Round-robin time slice. Ignored by other policies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<i64>,
}

impl SimulationRequest {
    /// Creates a request without a quantum.
    pub fn new(policy: Policy, processes: Vec<ProcessSpec>) -> Self {
        Self {
            policy,
            processes,
            quantum: None,
        }
    }

    /// Sets the round-robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Adds a process.
    pub fn with_process(mut self, process: ProcessSpec) -> Self {
        self.processes.push(process);
        self
    }
}

/// Result of a simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Policy that produced this report.
    pub policy: Policy,
    /// Quantum used, for round-robin.
    pub quantum: Option<Quantum>,
    /// Completed processes, sorted by ID.
    pub processes: Vec<CompletedProcess>,
    /// Busy slices in chronological order.
    pub timeline: Timeline,
    /// Summary indicators.
    pub kpi: SimulationKpi,
}

impl SimulationReport {
    /// Looks up the result for a process.
    pub fn process(&self, id: ProcessId) -> Option<&CompletedProcess> {
        self.processes
            .binary_search_by_key(&id, |p| p.id)
            .ok()
            .map(|i| &self.processes[i])
    }

    /// Completion times in ID order.
    pub fn completions(&self) -> Vec<i64> {
        self.processes.iter().map(|p| p.completion).collect()
    }
}

/// Stateless simulation dispatcher.
///
/// Each call works on its own copy of the input, so a `Simulator` can be
/// shared freely between threads.
///
/// # Example
///
/// ```
/// use cpu_schedsim::models::ProcessSpec;
/// use cpu_schedsim::simulator::{Policy, SimulationRequest, Simulator};
///
/// let request = SimulationRequest::new(
///     Policy::RoundRobin,
///     vec![ProcessSpec::new(1, 0, 5), ProcessSpec::new(2, 2, 3)],
/// )
/// .with_quantum(2);
///
/// let report = Simulator::new().run(&request).unwrap();
/// assert_eq!(report.completions(), vec![8, 7]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Simulator;

impl Simulator {
    /// Creates a simulator.
    pub fn new() -> Self {
        Self
    }

    /// Validates, simulates and derives metrics for a request.
    ///
    /// # Errors
    /// - `InvalidInput` if the process list is empty or any process is invalid.
    /// - `InvalidParameter` if the policy is round-robin and the quantum is
    ///   missing or not positive.
    /// - `Precondition` if an engine produced an inconsistent record.
    pub fn run(&self, request: &SimulationRequest) -> SimulationResult<SimulationReport> {
        if let Err(errors) = validate_processes(&request.processes) {
            log::warn!(
                "rejecting {} request: {} invalid input(s)",
                request.policy,
                errors.len()
            );
            return Err(SimulationError::InvalidInput(errors));
        }

        let plan = EnginePlan::resolve(request)?;

        log::debug!(
            "simulating {} process(es) under {}",
            request.processes.len(),
            request.policy
        );

        let working: Vec<Process> = request.processes.iter().map(Process::from_spec).collect();
        let run = plan.dispatch(working)?;

        let mut processes = run
            .processes
            .iter()
            .map(derive_metrics)
            .collect::<SimulationResult<Vec<_>>>()?;
        processes.sort_by_key(|p| p.id);

        let kpi = SimulationKpi::calculate(&processes, &run.timeline);
        log::debug!(
            "{} finished at t={}: avg turnaround {:.2}, avg waiting {:.2}",
            request.policy,
            kpi.makespan,
            kpi.avg_turnaround,
            kpi.avg_waiting
        );

        Ok(SimulationReport {
            policy: request.policy,
            quantum: plan.quantum(),
            processes,
            timeline: run.timeline,
            kpi,
        })
    }
}

/// A policy together with the parameters its engine needs.
#[derive(Debug, Clone, Copy)]
enum EnginePlan {
    Fcfs,
    Sjf,
    Srtf,
    RoundRobin(Quantum),
}

impl EnginePlan {
    /// Checks policy parameters; a round-robin request must carry a
    /// positive quantum.
    fn resolve(request: &SimulationRequest) -> SimulationResult<Self> {
        Ok(match request.policy {
            Policy::Fcfs => Self::Fcfs,
            Policy::Sjf => Self::Sjf,
            Policy::Srtf => Self::Srtf,
            Policy::RoundRobin => {
                let units = request
                    .quantum
                    .ok_or_else(|| SimulationError::InvalidParameter {
                        name: "quantum",
                        message: format!("required by {}", request.policy),
                    })?;
                Self::RoundRobin(Quantum::new(units)?)
            }
        })
    }

    fn quantum(self) -> Option<Quantum> {
        match self {
            Self::RoundRobin(quantum) => Some(quantum),
            Self::Fcfs | Self::Sjf | Self::Srtf => None,
        }
    }

    /// Runs the engine and checks it returned every input process once.
    fn dispatch(self, working: Vec<Process>) -> SimulationResult<EngineRun> {
        let expected: Vec<ProcessId> = working.iter().map(|p| p.id).collect();
        let run = match self {
            Self::Fcfs => engines::fcfs::run(working),
            Self::Sjf => engines::sjf::run(working),
            Self::Srtf => engines::srtf::run(working),
            Self::RoundRobin(quantum) => engines::round_robin::run(working, quantum),
        };

        if let Some(id) = unaccounted(&expected, &run.processes) {
            return Err(SimulationError::Precondition {
                id,
                message: format!(
                    "engine returned {} record(s) for {} process(es)",
                    run.processes.len(),
                    expected.len()
                ),
            });
        }
        Ok(run)
    }
}

/// First input ID missing from `produced`, or else the first ID produced
/// more than once.
fn unaccounted(expected: &[ProcessId], produced: &[Process]) -> Option<ProcessId> {
    let mut seen = HashSet::with_capacity(produced.len());
    let mut duplicate = None;
    for p in produced {
        if !seen.insert(p.id) && duplicate.is_none() {
            duplicate = Some(p.id);
        }
    }

    expected
        .iter()
        .copied()
        .find(|id| !seen.contains(id))
        .or(duplicate)
}

/// Simulates `processes` under `policy` and returns completed records
/// sorted by ID.
///
/// # Example
///
/// ```
/// use cpu_schedsim::models::ProcessSpec;
/// use cpu_schedsim::simulator::{simulate, Policy};
///
/// let done = simulate(
///     Policy::Fcfs,
///     &[
///         ProcessSpec::new(1, 0, 5),
///         ProcessSpec::new(2, 1, 3),
///         ProcessSpec::new(3, 2, 8),
///     ],
///     None,
/// )
/// .unwrap();
///
/// let waiting: Vec<i64> = done.iter().map(|p| p.waiting).collect();
/// assert_eq!(waiting, vec![0, 4, 6]);
/// ```
pub fn simulate(
    policy: Policy,
    processes: &[ProcessSpec],
    quantum: Option<i64>,
) -> SimulationResult<Vec<CompletedProcess>> {
    let request = SimulationRequest {
        policy,
        processes: processes.to_vec(),
        quantum,
    };
    Simulator::new().run(&request).map(|report| report.processes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_processes;
    use crate::validation::ValidationErrorKind;

    fn specs(rows: &[(i64, i64, i64)]) -> Vec<ProcessSpec> {
        // (id, burst, arrival), the textual input order
        rows.iter()
            .map(|&(id, burst, arrival)| ProcessSpec::new(id, arrival, burst))
            .collect()
    }

    #[test]
    fn test_fcfs_scenario() {
        let processes = specs(&[(1, 5, 0), (2, 3, 1), (3, 8, 2)]);
        let done = simulate(Policy::Fcfs, &processes, None).unwrap();
        let rows: Vec<_> = done
            .iter()
            .map(|p| (p.completion, p.turnaround, p.waiting))
            .collect();
        assert_eq!(rows, vec![(5, 5, 0), (8, 7, 4), (16, 14, 6)]);
    }

    #[test]
    fn test_rr_scenario() {
        let processes = specs(&[(1, 5, 0), (2, 3, 2)]);
        let done = simulate(Policy::RoundRobin, &processes, Some(2)).unwrap();
        assert_eq!(done[0].completion, 8);
        assert_eq!(done[1].completion, 7);
    }

    #[test]
    fn test_srtf_scenario() {
        let request = SimulationRequest::new(Policy::Srtf, specs(&[(1, 8, 0), (2, 4, 1)]));
        let report = Simulator::new().run(&request).unwrap();
        assert_eq!(report.process(2).map(|p| p.completion), Some(5));
        assert_eq!(report.process(1).map(|p| p.completion), Some(12));
        assert_eq!(report.timeline.slices[1].start, 1);
        assert_eq!(report.timeline.slices[1].process_id, 2);
    }

    #[test]
    fn test_results_sorted_by_id() {
        let processes = vec![
            ProcessSpec::new(30, 0, 1),
            ProcessSpec::new(10, 5, 1),
            ProcessSpec::new(20, 2, 1),
        ];
        for policy in [Policy::Fcfs, Policy::Sjf, Policy::Srtf] {
            let done = simulate(policy, &processes, None).unwrap();
            let ids: Vec<_> = done.iter().map(|p| p.id).collect();
            assert_eq!(ids, vec![10, 20, 30]);
        }
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = simulate(Policy::Fcfs, &[], None).unwrap_err();
        assert_eq!(err.validation_errors()[0].kind, ValidationErrorKind::EmptyInput);
    }

    #[test]
    fn test_invalid_process_rejected() {
        let err = simulate(Policy::Sjf, &[ProcessSpec::new(1, -1, 0)], None).unwrap_err();
        let fields: Vec<_> = err.validation_errors().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["arrival", "burst"]);
    }

    #[test]
    fn test_rr_requires_quantum() {
        let processes = specs(&[(1, 5, 0)]);
        let missing = simulate(Policy::RoundRobin, &processes, None).unwrap_err();
        assert!(matches!(
            missing,
            SimulationError::InvalidParameter { name: "quantum", .. }
        ));

        let zero = simulate(Policy::RoundRobin, &processes, Some(0)).unwrap_err();
        assert!(matches!(
            zero,
            SimulationError::InvalidParameter { name: "quantum", .. }
        ));
    }

    #[test]
    fn test_latest_representable_completion_accepted() {
        // (id, burst, arrival): completes exactly at i64::MAX
        let processes = specs(&[(1, 5, i64::MAX - 5)]);
        for policy in Policy::ALL {
            let done = simulate(policy, &processes, Some(2)).unwrap();
            assert_eq!(done[0].completion, i64::MAX);
            assert_eq!(done[0].waiting, 0);
        }

        let processes = specs(&[(1, i64::MAX - 1, 0), (2, 1, 0)]);
        for policy in Policy::ALL {
            let done = simulate(policy, &processes, Some(i64::MAX)).unwrap();
            assert_eq!(done.iter().map(|p| p.completion).max(), Some(i64::MAX));
        }
    }

    #[test]
    fn test_unrepresentable_completion_rejected() {
        let processes = specs(&[(1, 6, i64::MAX - 5)]);
        for policy in Policy::ALL {
            let err = simulate(policy, &processes, Some(2)).unwrap_err();
            assert_eq!(
                err.validation_errors()[0].kind,
                ValidationErrorKind::TimeOverflow
            );
        }

        let parsed = parse_processes("1 10 9223372036854775807").unwrap();
        let err = simulate(Policy::Srtf, &parsed, None).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidInput(_)));
    }

    #[test]
    fn test_plan_carries_quantum_only_for_rr() {
        let processes = specs(&[(1, 5, 0)]);

        let rr = SimulationRequest::new(Policy::RoundRobin, processes.clone())
            .with_quantum(4);
        let plan = EnginePlan::resolve(&rr).unwrap();
        assert_eq!(plan.quantum(), Some(Quantum::new(4).unwrap()));

        let fcfs = SimulationRequest::new(Policy::Fcfs, processes)
            .with_quantum(4);
        assert!(EnginePlan::resolve(&fcfs).unwrap().quantum().is_none());
    }

    #[test]
    fn test_unaccounted_names_missing_then_duplicate() {
        let full = vec![Process::new(1, 0, 1), Process::new(2, 0, 1)];
        assert_eq!(unaccounted(&[1, 2], &full), None);

        let missing = vec![Process::new(2, 0, 1)];
        assert_eq!(unaccounted(&[1, 2], &missing), Some(1));

        let duplicated = vec![
            Process::new(1, 0, 1),
            Process::new(2, 0, 1),
            Process::new(2, 0, 1),
        ];
        assert_eq!(unaccounted(&[1, 2], &duplicated), Some(2));

        let swapped = vec![Process::new(2, 0, 1), Process::new(2, 0, 1)];
        assert_eq!(unaccounted(&[1, 2], &swapped), Some(1));

        // Records after the first duplicate still count as produced.
        let early_duplicate = vec![
            Process::new(1, 0, 1),
            Process::new(1, 0, 1),
            Process::new(2, 0, 1),
        ];
        assert_eq!(unaccounted(&[1, 2], &early_duplicate), Some(1));
    }

    #[test]
    fn test_quantum_ignored_for_other_policies() {
        let done = simulate(Policy::Fcfs, &specs(&[(1, 5, 0)]), Some(-4)).unwrap();
        assert_eq!(done[0].completion, 5);
    }

    #[test]
    fn test_report_kpi_and_lookup() {
        let request = SimulationRequest::new(Policy::Fcfs, Vec::new())
            .with_process(ProcessSpec::new(1, 0, 5))
            .with_process(ProcessSpec::new(2, 1, 3));
        let report = Simulator::new().run(&request).unwrap();
        assert_eq!(report.kpi.makespan, 8);
        assert_eq!(report.kpi.total_waiting, 4);
        assert!(report.process(3).is_none());
        assert_eq!(report.quantum, None);
    }

    #[test]
    fn test_request_json_round_trip() {
        let request = SimulationRequest::new(Policy::RoundRobin, specs(&[(1, 5, 0)]))
            .with_quantum(3);
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"round_robin\""));
        let back: SimulationRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }

    #[test]
    fn test_request_json_without_quantum() {
        let json = r#"{"policy":"sjf","processes":[{"id":1,"arrival":0,"burst":2}]}"#;
        let request: SimulationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.quantum, None);
        assert!(Simulator::new().run(&request).is_ok());
    }
}
