//! Domain errors

use thiserror::Error;

/// Errors surfaced by record store operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The requested record does not exist.
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// The backing file is unreadable, unwritable, or malformed.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    /// Standard not-found error for a reservation id.
    pub fn reservation_not_found(id: i32) -> Self {
        Self::NotFound {
            entity: "Reservation",
            field: "id",
            value: id.to_string(),
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
