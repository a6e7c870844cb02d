//! # StoreClient Trait
//!
//! A common interface for record-specific clients, adding default `get` and
//! `delete` methods on top of a generic [`RecordClient`].

use crate::{RecordClient, RecordEntity, StoreError};
use async_trait::async_trait;

/// Trait for record-specific clients to inherit standard store operations.
///
/// Domain clients (e.g. an order-record client) wrap a `RecordClient<T>`
/// and add their own creation/update methods; this trait provides `get` and
/// `delete` for free, mapped into the domain error type.
#[async_trait]
pub trait StoreClient<T: RecordEntity>: Send + Sync {
    /// The record-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic RecordClient.
    fn inner(&self) -> &RecordClient<T>;

    /// Map store errors to the specific record error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch a record by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete a record by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
