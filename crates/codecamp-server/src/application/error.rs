//! Camp operation outcomes other than success

use thiserror::Error;

use codecamp::DomainError;

/// Failure of a camp operation, one variant per HTTP outcome
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CampError {
    /// Entity absent
    #[error("{0}")]
    NotFound(String),

    /// Business-rule violation on the camp's identity (e.g. moniker in use)
    #[error("{0}")]
    Conflict(String),

    /// Invalid input or a save that affected nothing
    #[error("{0}")]
    BadRequest(String),

    /// Unexpected infrastructure error
    #[error("Database failure: {0}")]
    ServerFailure(String),
}

impl From<DomainError> for CampError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::BadRequest(msg),
            DomainError::Conflict(msg) => Self::Conflict(msg),
            DomainError::Repository(msg) => Self::ServerFailure(msg),
        }
    }
}
