//! Error types for the order-record actor.

use thiserror::Error;

/// Errors that can occur during order-record operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RecordError {
    /// The requested order record was not found.
    #[error("Order record not found: {0}")]
    NotFound(String),

    /// The record data provided violates a record invariant.
    #[error("Order record validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the store actor.
    #[error("Store communication error: {0}")]
    StoreCommunicationError(String),
}

impl From<String> for RecordError {
    fn from(msg: String) -> Self {
        RecordError::StoreCommunicationError(msg)
    }
}
