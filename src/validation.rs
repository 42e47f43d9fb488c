//! Input validation for simulation requests.
//!
//! Checks the process list before any engine runs. Detects:
//! - Empty process lists
//! - Duplicate IDs
//! - Negative arrival times
//! - Non-positive bursts
//! - Workloads whose last possible completion time does not fit in `i64`
//!
//! All violations are collected; the caller sees every problem at once.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{ProcessId, ProcessSpec};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending process, when known.
    pub process_id: Option<ProcessId>,
    /// Offending input line (1-based), for textual input.
    pub line: Option<usize>,
    /// Name of the violated field.
    pub field: &'static str,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyInput,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process needs zero or negative CPU time.
    NonPositiveBurst,
    /// A line of textual input could not be read as `id burst arrival`.
    MalformedLine,
    /// Latest arrival plus total burst exceeds the representable time range.
    TimeOverflow,
}

impl ValidationError {
    /// Creates an error not tied to a process or line.
    pub fn new(
        kind: ValidationErrorKind,
        field: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            process_id: None,
            line: None,
            field,
            message: message.into(),
        }
    }

    /// Creates an error about a specific process.
    pub fn for_process(
        kind: ValidationErrorKind,
        process_id: ProcessId,
        field: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            process_id: Some(process_id),
            ..Self::new(kind, field, message)
        }
    }

    /// Creates an error about a line of textual input.
    pub fn for_line(
        kind: ValidationErrorKind,
        line: usize,
        field: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            line: Some(line),
            ..Self::new(kind, field, message)
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(line) = self.line {
            write!(f, "line {line}: ")?;
        }
        if let Some(id) = self.process_id {
            write!(f, "process {id}: ")?;
        }
        write!(f, "{} ({})", self.message, self.field)
    }
}

/// Validates a process list.
///
/// Checks:
/// 1. The list is not empty
/// 2. No duplicate IDs
/// 3. Every arrival is `>= 0`
/// 4. Every burst is `> 0`
/// 5. `max(arrival) + sum(burst)` fits in `i64`; no engine clock can pass
///    that bound
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[ProcessSpec]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "processes",
            "at least one process is required",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::for_process(
                ValidationErrorKind::DuplicateId,
                p.id,
                "id",
                format!("duplicate process ID {}", p.id),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::for_process(
                ValidationErrorKind::NegativeArrival,
                p.id,
                "arrival",
                format!("arrival {} is negative", p.arrival),
            ));
        }

        if p.burst <= 0 {
            errors.push(ValidationError::for_process(
                ValidationErrorKind::NonPositiveBurst,
                p.id,
                "burst",
                format!("burst {} must be positive", p.burst),
            ));
        }
    }

    if let Some(err) = check_time_range(processes) {
        errors.push(err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks that the latest possible completion time is representable.
///
/// Only processes with in-range fields are counted; the others are
/// already reported.
fn check_time_range(processes: &[ProcessSpec]) -> Option<ValidationError> {
    let valid = processes.iter().filter(|p| p.arrival >= 0 && p.burst > 0);

    let mut latest_arrival = 0i64;
    let mut total_burst = 0i64;
    for p in valid {
        latest_arrival = latest_arrival.max(p.arrival);
        total_burst = match total_burst.checked_add(p.burst) {
            Some(total) => total,
            None => return Some(overflow_error(format!("total burst exceeds {}", i64::MAX))),
        };
    }

    match latest_arrival.checked_add(total_burst) {
        Some(_) => None,
        None => Some(overflow_error(format!(
            "latest arrival {latest_arrival} plus total burst {total_burst} exceeds {}",
            i64::MAX
        ))),
    }
}

fn overflow_error(message: String) -> ValidationError {
    ValidationError::new(ValidationErrorKind::TimeOverflow, "burst", message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<ProcessSpec> {
        vec![
            ProcessSpec::new(1, 0, 5),
            ProcessSpec::new(2, 1, 3),
            ProcessSpec::new(3, 2, 8),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes()).is_ok());
    }

    #[test]
    fn test_empty_input() {
        let errors = validate_processes(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyInput);
        assert_eq!(errors[0].field, "processes");
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![ProcessSpec::new(1, 0, 5), ProcessSpec::new(1, 2, 3)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.process_id == Some(1)));
    }

    #[test]
    fn test_negative_arrival() {
        let processes = vec![ProcessSpec::new(4, -1, 5)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeArrival);
        assert_eq!(errors[0].field, "arrival");
    }

    #[test]
    fn test_zero_burst() {
        let processes = vec![ProcessSpec::new(4, 0, 0)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveBurst);
        assert_eq!(errors[0].field, "burst");
    }

    #[test]
    fn test_multiple_errors() {
        let processes = vec![
            ProcessSpec::new(1, -3, 0), // Negative arrival + zero burst
            ProcessSpec::new(1, 0, 2),  // Duplicate ID
        ];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_time_range_boundary_accepted() {
        let processes = vec![ProcessSpec::new(1, i64::MAX - 5, 5)];
        assert!(validate_processes(&processes).is_ok());

        let processes = vec![ProcessSpec::new(1, 0, i64::MAX - 1), ProcessSpec::new(2, 0, 1)];
        assert!(validate_processes(&processes).is_ok());
    }

    #[test]
    fn test_time_range_one_over_rejected() {
        let processes = vec![ProcessSpec::new(1, i64::MAX - 5, 6)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
        assert_eq!(errors[0].field, "burst");
        assert!(errors[0].message.contains("latest arrival"));
    }

    #[test]
    fn test_time_range_burst_sum_overflow() {
        let processes = vec![ProcessSpec::new(1, 0, i64::MAX), ProcessSpec::new(2, 0, 1)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
        assert!(errors[0].message.contains("total burst"));
    }

    #[test]
    fn test_time_range_ignores_invalid_processes() {
        // The negative burst is reported on its own, not as an overflow.
        let processes = vec![ProcessSpec::new(1, i64::MAX, -5)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveBurst);
    }

    #[test]
    fn test_display_names_field_and_context() {
        let e = ValidationError::for_line(
            ValidationErrorKind::MalformedLine,
            2,
            "burst",
            "`x` is not an integer",
        );
        assert_eq!(e.to_string(), "line 2: `x` is not an integer (burst)");

        let e = ValidationError::for_process(
            ValidationErrorKind::NonPositiveBurst,
            9,
            "burst",
            "burst 0 must be positive",
        );
        assert_eq!(e.to_string(), "process 9: burst 0 must be positive (burst)");
    }
}
