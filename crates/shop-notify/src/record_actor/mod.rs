//! # Order Record Actor
//!
//! The store actor for [`OrderRecord`]s – the service-side replacement for
//! the storefront's session storage.
//!
//! ## Structure
//!
//! - [`entity`] - [`RecordEntity`](notify_framework::RecordEntity) implementation for [`OrderRecord`]
//! - [`error`] - [`RecordError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, client) = record_actor::new();
//! tokio::spawn(actor.run());
//!
//! let id = client.record_dispatch(OrderRecordCreate { ... }).await?;
//! ```
//!
//! ## Key Properties
//!
//! - **External identity**: records are keyed by the order id minted at
//!   checkout; creating under an existing id replaces the record.
//! - **Invariant enforcement**: a record may carry a WhatsApp outcome only
//!   if the payload had a phone number – violations are rejected at
//!   creation.
//! - **Session-scoped lifecycle**: created after dispatch, mutated only by
//!   resend, deleted when the owning session ends.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderRecordClient;
use crate::model::OrderRecord;
use notify_framework::RecordActor;

/// Creates a new order-record actor and its client.
pub fn new() -> (RecordActor<OrderRecord>, OrderRecordClient) {
    let (actor, generic_client) = RecordActor::new(32);
    let client = OrderRecordClient::new(generic_client);

    (actor, client)
}
