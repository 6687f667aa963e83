use crate::types::WorkoutKind;
use thiserror::Error;

/// Why a sensor package could not be turned into a workout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PackageError {
    #[error("unknown training type: {0:?}")]
    UnknownKind(String),

    #[error("incorrect data type: value #{index} ({value}) is not a valid {expected}")]
    InvalidValueType {
        index: usize,
        value: String,
        expected: &'static str,
    },

    #[error("incorrect number of values for {kind}: expected {expected}, got {got}")]
    ArityMismatch {
        kind: WorkoutKind,
        expected: usize,
        got: usize,
    },

    #[error("duration must be a positive number of hours, got {0}")]
    NonPositiveDuration(f64),

    #[error("height must be a positive number of centimetres, got {0}")]
    NonPositiveHeight(f64),
}
