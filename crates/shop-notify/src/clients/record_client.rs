//! # Order Record Client
//!
//! Provides a high-level API for interacting with the order-record actor.
//! It wraps a `RecordClient<OrderRecord>` and exposes domain-specific
//! methods.

use crate::model::{OrderId, OrderRecord, OrderRecordCreate, OrderRecordUpdate};
use crate::record_actor::RecordError;
use async_trait::async_trait;
use notify_framework::{RecordClient, StoreClient, StoreError};
use tracing::{debug, instrument};

/// Client for interacting with the order-record actor.
#[derive(Clone)]
pub struct OrderRecordClient {
    inner: RecordClient<OrderRecord>,
}

impl OrderRecordClient {
    pub fn new(inner: RecordClient<OrderRecord>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl StoreClient<OrderRecord> for OrderRecordClient {
    type Error = RecordError;

    fn inner(&self) -> &RecordClient<OrderRecord> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        match e {
            StoreError::NotFound(id) => RecordError::NotFound(id),
            other => RecordError::StoreCommunicationError(other.to_string()),
        }
    }
}

impl OrderRecordClient {
    /// Writes (or refreshes) the record for a dispatched order.
    #[instrument(skip(self, params), fields(order_id = %params.payload.order_id))]
    pub async fn record_dispatch(
        &self,
        params: OrderRecordCreate,
    ) -> Result<OrderId, RecordError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Applies per-channel outcome updates to an existing record.
    #[instrument(skip(self))]
    pub async fn update_outcomes(
        &self,
        id: OrderId,
        update: OrderRecordUpdate,
    ) -> Result<OrderRecord, RecordError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}
