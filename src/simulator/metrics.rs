//! Per-process metric derivation.
//!
//! Applied uniformly to every engine's output; engines never compute
//! turnaround or waiting themselves.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | `completion - arrival` |
//! | Waiting | `turnaround - burst` |

use crate::error::{SimulationError, SimulationResult};
use crate::models::{CompletedProcess, Process};

/// Derives turnaround and waiting for a completed record.
///
/// # Errors
/// `SimulationError::Precondition` if `completion` is unset, earlier than
/// `arrival`, or leaves less than `burst` time since arrival. Any of these
/// means the engine that produced the record is wrong.
pub fn derive_metrics(process: &Process) -> SimulationResult<CompletedProcess> {
    let completion = process.completion.ok_or_else(|| SimulationError::Precondition {
        id: process.id,
        message: format!("completion unset ({} units remaining)", process.remaining),
    })?;

    if completion < process.arrival {
        return Err(SimulationError::Precondition {
            id: process.id,
            message: format!(
                "completion {completion} precedes arrival {}",
                process.arrival
            ),
        });
    }

    let turnaround = completion - process.arrival;
    let waiting = turnaround - process.burst;
    if waiting < 0 {
        return Err(SimulationError::Precondition {
            id: process.id,
            message: format!("negative waiting time {waiting}"),
        });
    }

    Ok(CompletedProcess {
        id: process.id,
        arrival: process.arrival,
        burst: process.burst,
        completion,
        turnaround,
        waiting,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(id: i64, arrival: i64, burst: i64, completion: i64) -> Process {
        let mut p = Process::new(id, arrival, burst);
        p.remaining = 0;
        p.completion = Some(completion);
        p
    }

    #[test]
    fn test_derive_basic() {
        let m = derive_metrics(&completed(3, 2, 8, 16)).unwrap();
        assert_eq!(m.turnaround, 14);
        assert_eq!(m.waiting, 6);
        assert_eq!(m.completion, 16);
    }

    #[test]
    fn test_derive_unset_completion() {
        let err = derive_metrics(&Process::new(1, 0, 5)).unwrap_err();
        assert!(matches!(err, SimulationError::Precondition { id: 1, .. }));
    }

    #[test]
    fn test_derive_completion_before_arrival() {
        let err = derive_metrics(&completed(1, 10, 1, 5)).unwrap_err();
        assert!(err.to_string().contains("precedes arrival"));
    }

    #[test]
    fn test_derive_negative_waiting() {
        let err = derive_metrics(&completed(1, 0, 5, 3)).unwrap_err();
        assert!(err.to_string().contains("negative waiting"));
    }
}
