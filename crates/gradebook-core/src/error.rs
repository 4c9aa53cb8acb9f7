use thiserror::Error;

/// Rejection of a name or grade before it reaches the roster.
///
/// `EmptyGradeInput` and `NotANumber` come from raw text parsing; the roster
/// itself only ever reports `EmptyName` and `OutOfRange`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields!")]
    EmptyName,

    #[error("Please fill in all fields!")]
    EmptyGradeInput,

    #[error("Please enter a valid number for grade! (got {0:?})")]
    NotANumber(String),

    #[error("Grade must be between 0 and 100! (got {0})")]
    OutOfRange(f64),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
