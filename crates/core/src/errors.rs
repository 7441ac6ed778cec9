use thiserror::Error;

/// Client-input faults raised before a submission reaches the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("at least one time slot must be selected")]
    NoSlotsSelected,

    #[error("time slot {0} is not available for selection")]
    InvalidSlot(String),

    #[error("judge {0} is not on the roster")]
    UnknownJudge(String),
}

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Storage error: {0}")]
    Storage(#[from] eyre::Report),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
