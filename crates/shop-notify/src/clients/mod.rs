//! # Typed Clients
//!
//! Domain-specific wrappers over the generic
//! [`RecordClient`](notify_framework::RecordClient), hiding the message
//! passing behind ordinary async methods.

pub mod record_client;

pub use record_client::OrderRecordClient;
