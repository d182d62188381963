// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures the hiring domain can raise on its own: bad input to a value
/// object, a uniqueness clash, a missing record, or the backing store
/// misbehaving.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("conflicting record: {0}")]
    Conflict(String),
    #[error("no such record: {0}")]
    NotFound(String),
    #[error("storage failure: {0}")]
    Persistence(String),
}
