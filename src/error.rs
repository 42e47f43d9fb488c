//! Error types for simulation requests.
//!
//! Every error is raised synchronously, before or instead of a result;
//! no partial results are ever returned.

use thiserror::Error;

use crate::models::ProcessId;
use crate::validation::ValidationError;

/// Simulation operation result.
pub type SimulationResult<T> = Result<T, SimulationError>;

/// Simulation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The process list (or its textual form) violates an input rule.
    #[error("invalid input: {}", join_errors(.0))]
    InvalidInput(Vec<ValidationError>),

    /// A policy-specific parameter is missing or out of range.
    #[error("invalid parameter `{name}`: {message}")]
    InvalidParameter { name: &'static str, message: String },

    /// An engine produced a record that breaks a metric invariant.
    ///
    /// Indicates a bug in an engine, not a user error.
    #[error("precondition violated for process {id}: {message}")]
    Precondition { id: ProcessId, message: String },
}

impl SimulationError {
    /// Validation errors carried by an `InvalidInput`, empty otherwise.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) => errors,
            _ => &[],
        }
    }
}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_invalid_input_message_lists_every_error() {
        let err = SimulationError::InvalidInput(vec![
            ValidationError::for_process(
                ValidationErrorKind::NegativeArrival,
                3,
                "arrival",
                "arrival -1 is negative",
            ),
            ValidationError::for_process(
                ValidationErrorKind::NonPositiveBurst,
                4,
                "burst",
                "burst 0 must be positive",
            ),
        ]);
        let msg = err.to_string();
        assert!(msg.starts_with("invalid input: "));
        assert!(msg.contains("arrival -1 is negative"));
        assert!(msg.contains("burst 0 must be positive"));
        assert_eq!(err.validation_errors().len(), 2);
    }

    #[test]
    fn test_parameter_message() {
        let err = SimulationError::InvalidParameter {
            name: "quantum",
            message: "must be positive, got 0".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid parameter `quantum`: must be positive, got 0"
        );
        assert!(err.validation_errors().is_empty());
    }
}
