//! Textual process-list parsing.
//!
//! One process per line, three whitespace-separated integers in the order
//! `id burst arrival`. Blank lines are skipped. Range checks (negative
//! arrival, non-positive burst, duplicate IDs) are left to
//! [`validate_processes`](crate::validation::validate_processes) so that
//! parsed and programmatic input share one set of rules.

use crate::error::{SimulationError, SimulationResult};
use crate::models::ProcessSpec;
use crate::validation::{ValidationError, ValidationErrorKind};

const FIELDS: [&str; 3] = ["id", "burst", "arrival"];

/// Parses a process list.
///
/// # Errors
/// `InvalidInput` with one `MalformedLine` error per bad line, naming the
/// 1-based line number and the offending field.
///
/// # Example
///
/// ```
/// use cpu_schedsim::input::parse_processes;
///
/// let processes = parse_processes("1 5 0\n2 3 1\n").unwrap();
/// assert_eq!(processes[1].burst, 3);
/// assert_eq!(processes[1].arrival, 1);
/// ```
pub fn parse_processes(text: &str) -> SimulationResult<Vec<ProcessSpec>> {
    let mut processes = Vec::new();
    let mut errors = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line, idx + 1) {
            Ok(spec) => processes.push(spec),
            Err(e) => errors.push(e),
        }
    }

    if errors.is_empty() {
        Ok(processes)
    } else {
        Err(SimulationError::InvalidInput(errors))
    }
}

fn parse_line(line: &str, line_no: usize) -> Result<ProcessSpec, ValidationError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != FIELDS.len() {
        return Err(ValidationError::for_line(
            ValidationErrorKind::MalformedLine,
            line_no,
            "line",
            format!(
                "expected 3 fields `id burst arrival`, found {}",
                parts.len()
            ),
        ));
    }

    let mut values = [0i64; 3];
    for ((value, raw), field) in values.iter_mut().zip(&parts).zip(FIELDS) {
        *value = raw.parse().map_err(|_| {
            ValidationError::for_line(
                ValidationErrorKind::MalformedLine,
                line_no,
                field,
                format!("`{raw}` is not an integer"),
            )
        })?;
    }

    let [id, burst, arrival] = values;
    Ok(ProcessSpec::new(id, arrival, burst))
}
