//! # Generic Record Actor
//!
//! The `RecordActor` owns the record store and processes requests
//! sequentially. It is the "server" half of the actor pattern: exclusive
//! ownership of state within one task means no `Mutex` or `RwLock` is ever
//! needed for the store.

use crate::client::RecordClient;
use crate::entity::RecordEntity;
use crate::error::StoreError;
use crate::message::RecordRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of records.
///
/// **Concurrency Model**:
/// Each actor processes its own messages *sequentially* in a loop, so the
/// store needs no locking. Multiple actors (for different record types) run
/// in parallel, each in its own Tokio task.
///
/// # Usage Pattern
///
/// 1. **Create**: `RecordActor::new()` returns the actor (server) and its
///    [`RecordClient`] (interface).
/// 2. **Run**: spawn `actor.run()` in a background task.
/// 3. **Use**: clone the client freely; the actor shuts down when the last
///    client is dropped.
///
/// # Operations
///
/// * **Create**: builds the record via `T::from_create_params` and inserts
///   it keyed by `record.id()`. An existing record under the same id is
///   replaced – dispatching the same order twice is two deliveries and one
///   (refreshed) record, never a rejected request.
/// * **Get**: returns a clone of the record, or `None`.
/// * **Update**: runs the `on_update` hook on the stored record.
/// * **Delete**: runs the `on_delete` hook, then removes the record.
pub struct RecordActor<T: RecordEntity> {
    receiver: mpsc::Receiver<RecordRequest<T>>,
    store: HashMap<T::Id, T>,
}

impl<T: RecordEntity> RecordActor<T> {
    /// Creates a new `RecordActor` and its associated `RecordClient`.
    ///
    /// `buffer_size` is the capacity of the mpsc channel; client calls wait
    /// when it is full.
    pub fn new(buffer_size: usize) -> (Self, RecordClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
        };
        let client = RecordClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel
    /// closes (i.e. until every client has been dropped).
    pub async fn run(mut self) {
        // Extract just the type name (e.g. "OrderRecord" instead of
        // "shop_notify::model::record::OrderRecord")
        let record_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(record_type, "Store actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                RecordRequest::Create { params, respond_to } => {
                    debug!(record_type, ?params, "Create");
                    match T::from_create_params(params) {
                        Ok(item) => {
                            let id = item.id().clone();
                            let replaced = self.store.insert(id.clone(), item).is_some();
                            info!(record_type, %id, replaced, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(record_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(StoreError::RecordError(Box::new(e))));
                        }
                    }
                }
                RecordRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(record_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                RecordRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(record_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        // Await the async hook
                        if let Err(e) = item.on_update(update).await {
                            warn!(record_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(StoreError::RecordError(Box::new(e))));
                            continue;
                        }
                        info!(record_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(record_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
                RecordRequest::Delete { id, respond_to } => {
                    debug!(record_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        // Await the async hook
                        if let Err(e) = item.on_delete().await {
                            warn!(record_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(StoreError::RecordError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(record_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(record_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(record_type, size = self.store.len(), "Shutdown");
    }
}
