//! # RecordEntity Trait
//!
//! The contract a record type must implement to be managed by the generic
//! [`RecordActor`](crate::actor::RecordActor).
//!
//! # Architecture Note
//! By defining one contract for all record types, the actor logic is written
//! *once* and reused everywhere. Associated types enforce that a record can
//! only receive its own DTOs: you can't accidentally send an order-record
//! update to some other store. The compiler prevents this class of bugs
//! entirely.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record must implement to be managed by a `RecordActor`.
///
/// # Identity
/// Records carry externally supplied identity (e.g. the order id minted at
/// checkout), exposed through [`id`](RecordEntity::id). The actor never
/// generates ids; creating a record whose id already exists **replaces**
/// the stored record (upsert).
///
/// # Async Hooks
/// The trait is `#[async_trait]` so update hooks may perform asynchronous
/// work. The default `on_delete` does nothing.
#[async_trait]
pub trait RecordEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this record.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new record (DTO).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing record.
    type Update: Send + Sync + Debug;

    /// The error type for this record.
    ///
    /// # Design Note: Error Granularity
    /// One error enum per record type, not one per operation. Clients deal
    /// with a single error type, at the cost of the enum being the union of
    /// every operation's failures.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full record from the creation payload.
    ///
    /// This is the place for structural validation – return `Err` to reject
    /// a payload that violates a record invariant.
    fn from_create_params(params: Self::Create) -> Result<Self, Self::Error>;

    /// The record's identity, used as the store key.
    fn id(&self) -> &Self::Id;

    /// Called when an update request is received. The record mutates its
    /// own state inside the hook.
    async fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Called immediately before the record is removed from the store.
    async fn on_delete(&self) -> Result<(), Self::Error> {
        Ok(())
    }
}
