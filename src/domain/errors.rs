use chrono::NaiveDate;
use thiserror::Error;

/// Failures of the public holiday synchronization.
///
/// None of these are fatal for day resolution: callers fall back to
/// "no external holiday known" for the affected year.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HolidayError {
    /// Provider unreachable, timed out or answered with a non-2xx status.
    #[error("Holiday provider fetch failed: {0}")]
    Fetch(String),
    /// Provider answered with a payload we could not understand.
    #[error("Holiday provider returned an unexpected payload: {0}")]
    Parse(String),
    #[error("Holiday storage error: {0}")]
    Storage(String),
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid date range: {from} is after {to}")]
    InvalidDateRange { from: NaiveDate, to: NaiveDate },
    #[error("Import not found: {0}")]
    ImportNotFound(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error(transparent)]
    Holiday(#[from] HolidayError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        DomainError::Storage(err.to_string())
    }
}
