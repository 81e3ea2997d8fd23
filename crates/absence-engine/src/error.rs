//! Error types for absence-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AbsenceError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    #[error("Invalid absence record: {0}")]
    InvalidRecord(String),
}

pub type Result<T> = std::result::Result<T, AbsenceError>;
