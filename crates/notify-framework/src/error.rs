//! # Framework Errors
//!
//! Common error types used throughout the record store. Centralizing the
//! definitions keeps error handling consistent across all actors and
//! clients.

/// Errors that can occur within the record store itself.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store actor closed")]
    ActorClosed,
    #[error("Store actor dropped response channel")]
    ActorDropped,
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Record error: {0}")]
    RecordError(Box<dyn std::error::Error + Send + Sync>),
}
