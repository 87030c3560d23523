use thiserror::Error;

use crate::models::WorkoutKind;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkoutError {
    #[error("Unknown workout kind: {0:?}")]
    UnknownWorkoutKind(String),

    #[error("{kind} expects {expected} parameters, got {actual}")]
    ArityMismatch {
        kind: WorkoutKind,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("IO error: {0}")]
    Io(String),

    #[error("Package file error: {0}")]
    PackageFile(String),
}

impl From<std::io::Error> for WorkoutError {
    fn from(e: std::io::Error) -> Self {
        WorkoutError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for WorkoutError {
    fn from(e: serde_json::Error) -> Self {
        WorkoutError::PackageFile(e.to_string())
    }
}

impl WorkoutError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        WorkoutError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = WorkoutError> = std::result::Result<T, E>;
