//! # Order-Status View & Resend Flow
//!
//! The client-facing state machine over stored order records:
//!
//! - **Initial**: no record → [`OrderStatusView::NotFound`] ("no order
//!   found").
//! - **Loaded**: record present → per-channel status blocks rendered from
//!   the [`OrderStatusSummary`].
//! - **Resend-in-progress**: one resend at a time *per order*; a second
//!   trigger for the same order while one is in flight is refused by a
//!   simple guard (not true cancellation – an issued provider call cannot
//!   be aborted). Other orders are unaffected.
//! - **Resend-resolved**: the stored email outcome is replaced by the new
//!   dispatch result; a transport error during the call becomes a failure
//!   outcome, never a fault.
//!
//! A resend requires both customer name and email in the stored payload.
//! Absent either, the flow surfaces a local validation failure and **no**
//! network call occurs.

use crate::clients::OrderRecordClient;
use crate::dispatch::Dispatcher;
use crate::model::{OrderId, OrderPayload, OrderRecord, OrderRecordUpdate};
use crate::record_actor::RecordError;
use chrono::{DateTime, Utc};
use notify_framework::{ChannelOutcome, NotificationChannel, StoreClient};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tracing::{info, instrument, warn};

/// What the status page renders for one order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusSummary {
    pub order_id: OrderId,
    pub order_date: DateTime<Utc>,
    pub email: ChannelOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Present only when the order carried a phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<ChannelOutcome>,
}

impl From<&OrderRecord> for OrderStatusSummary {
    fn from(record: &OrderRecord) -> Self {
        Self {
            order_id: record.id.clone(),
            order_date: record.order_date,
            email: record.email.clone(),
            phone_number: record.payload.phone_number.clone(),
            whatsapp: record.whatsapp.clone(),
        }
    }
}

/// The view states of the status page.
#[derive(Debug, Clone)]
pub enum OrderStatusView {
    /// Nothing stored for this order – show the "no order found" notice.
    NotFound,
    Loaded(OrderStatusSummary),
}

/// How a resend attempt resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum ResendResolution {
    /// The provider accepted the email again.
    Resent,
    /// The provider (or transport) failed; reason attached.
    ResendFailed(String),
    /// Stored payload is missing customer name or email – refused locally,
    /// no network call was made.
    MissingContact,
    /// A prior resend for this order is still in flight; this one was
    /// refused by the "disable while loading" guard.
    AlreadyInFlight,
}

/// Drives the status view and the manual email resend.
pub struct ResendFlow<E, W> {
    dispatcher: Arc<Dispatcher<E, W>>,
    records: OrderRecordClient,
    /// Orders with a resend currently in flight. Mirrors the page's
    /// "disable while loading" button state per order; a hung provider
    /// call for one order never blocks resends for another. Entries are
    /// removed on every exit path via [`InFlightGuard`].
    in_flight: Mutex<HashSet<OrderId>>,
}

/// Removes the order's in-flight entry when the resend attempt leaves
/// scope.
struct InFlightGuard<'a> {
    set: &'a Mutex<HashSet<OrderId>>,
    id: OrderId,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.set.lock().unwrap().remove(&self.id);
    }
}

impl<E, W> ResendFlow<E, W>
where
    E: NotificationChannel<Message = OrderPayload>,
    W: NotificationChannel<Message = OrderPayload>,
{
    pub fn new(dispatcher: Arc<Dispatcher<E, W>>, records: OrderRecordClient) -> Self {
        Self {
            dispatcher,
            records,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// Loads the status view for an order.
    #[instrument(skip(self))]
    pub async fn load(&self, order_id: OrderId) -> Result<OrderStatusView, RecordError> {
        match self.records.get(order_id).await? {
            Some(record) => Ok(OrderStatusView::Loaded(OrderStatusSummary::from(&record))),
            None => Ok(OrderStatusView::NotFound),
        }
    }

    /// Re-attempts the email channel for a stored order and records the new
    /// outcome.
    ///
    /// Returns `Err` only for store-level problems (record missing, actor
    /// gone); everything about the delivery itself is a
    /// [`ResendResolution`].
    #[instrument(skip(self))]
    pub async fn resend(&self, order_id: OrderId) -> Result<ResendResolution, RecordError> {
        // The lock is held only for the insert, never across an await
        if !self.in_flight.lock().unwrap().insert(order_id.clone()) {
            warn!(%order_id, "Resend refused: one already in flight for this order");
            return Ok(ResendResolution::AlreadyInFlight);
        }
        let _guard = InFlightGuard {
            set: &self.in_flight,
            id: order_id.clone(),
        };

        let record = self
            .records
            .get(order_id.clone())
            .await?
            .ok_or_else(|| RecordError::NotFound(order_id.to_string()))?;

        // Local validation before any network activity
        if !record.payload.has_email_contact() {
            info!(%order_id, "Resend refused: stored payload missing name or email");
            return Ok(ResendResolution::MissingContact);
        }

        let outcome = self.dispatcher.resend_email(&record.payload).await;
        let resolution = match &outcome {
            ChannelOutcome::Sent => ResendResolution::Resent,
            ChannelOutcome::Failed(reason) => ResendResolution::ResendFailed(reason.clone()),
            ChannelOutcome::Pending => ResendResolution::ResendFailed("not attempted".to_string()),
        };

        // Only the email outcome is touched by a resend
        self.records
            .update_outcomes(
                order_id,
                OrderRecordUpdate {
                    email: Some(outcome),
                    whatsapp: None,
                },
            )
            .await?;

        Ok(resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderItem, OrderRecordCreate};
    use crate::record_actor;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    /// Email double that counts deliveries, to prove validation failures
    /// never reach the channel.
    struct CountingChannel {
        outcome: ChannelOutcome,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl NotificationChannel for CountingChannel {
        type Message = OrderPayload;

        fn name(&self) -> &'static str {
            "email"
        }

        async fn deliver(&self, _order: &OrderPayload) -> ChannelOutcome {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }
    }

    fn payload(customer_name: &str, email: &str) -> OrderPayload {
        OrderPayload {
            customer_name: customer_name.into(),
            email: email.into(),
            phone_number: None,
            order_id: OrderId::from("X1"),
            order_total: 1200.0,
            items: vec![OrderItem {
                name: "Mug".into(),
                quantity: 2,
                price: 600.0,
            }],
        }
    }

    fn flow(
        email_outcome: ChannelOutcome,
    ) -> (
        ResendFlow<CountingChannel, CountingChannel>,
        OrderRecordClient,
        Arc<AtomicUsize>,
    ) {
        let calls = Arc::new(AtomicUsize::new(0));
        let dispatcher = Arc::new(Dispatcher::new(
            CountingChannel {
                outcome: email_outcome,
                calls: calls.clone(),
            },
            CountingChannel {
                outcome: ChannelOutcome::Sent,
                calls: Arc::new(AtomicUsize::new(0)),
            },
        ));
        let (actor, records) = record_actor::new();
        tokio::spawn(actor.run());
        let flow = ResendFlow::new(dispatcher, records.clone());
        (flow, records, calls)
    }

    #[tokio::test]
    async fn load_without_record_is_not_found() {
        let (flow, _records, _calls) = flow(ChannelOutcome::Sent);
        let view = flow.load(OrderId::from("X1")).await.unwrap();
        assert!(matches!(view, OrderStatusView::NotFound));
    }

    #[tokio::test]
    async fn resend_updates_only_the_email_outcome() {
        let (flow, records, calls) = flow(ChannelOutcome::Sent);
        records
            .record_dispatch(OrderRecordCreate {
                payload: payload("Asha", "asha@example.com"),
                email: ChannelOutcome::Failed("relay down".into()),
                whatsapp: None,
            })
            .await
            .unwrap();

        let resolution = flow.resend(OrderId::from("X1")).await.unwrap();
        assert_eq!(resolution, ResendResolution::Resent);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let record = records.get(OrderId::from("X1")).await.unwrap().unwrap();
        assert!(record.email.is_sent());
        assert!(record.whatsapp.is_none());
    }

    #[tokio::test]
    async fn missing_contact_refuses_without_network() {
        let (flow, records, calls) = flow(ChannelOutcome::Sent);
        records
            .record_dispatch(OrderRecordCreate {
                payload: payload("Asha", ""),
                email: ChannelOutcome::Failed("relay down".into()),
                whatsapp: None,
            })
            .await
            .unwrap();

        let resolution = flow.resend(OrderId::from("X1")).await.unwrap();
        assert_eq!(resolution, ResendResolution::MissingContact);
        // The channel was never invoked
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        // And the stored outcome is untouched
        let record = records.get(OrderId::from("X1")).await.unwrap().unwrap();
        assert_eq!(record.email, ChannelOutcome::Failed("relay down".into()));
    }

    #[tokio::test]
    async fn provider_failure_becomes_failure_outcome() {
        let (flow, records, _calls) = flow(ChannelOutcome::Failed("status 503".into()));
        records
            .record_dispatch(OrderRecordCreate {
                payload: payload("Asha", "asha@example.com"),
                email: ChannelOutcome::Sent,
                whatsapp: None,
            })
            .await
            .unwrap();

        let resolution = flow.resend(OrderId::from("X1")).await.unwrap();
        assert_eq!(
            resolution,
            ResendResolution::ResendFailed("status 503".into())
        );

        let record = records.get(OrderId::from("X1")).await.unwrap().unwrap();
        assert_eq!(record.email, ChannelOutcome::Failed("status 503".into()));
    }

    #[tokio::test]
    async fn resend_for_unknown_order_is_store_error() {
        let (flow, _records, calls) = flow(ChannelOutcome::Sent);
        let result = flow.resend(OrderId::from("missing")).await;
        assert!(matches!(result, Err(RecordError::NotFound(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    /// Email double that blocks inside the provider call for one specific
    /// order until released; every other order sends immediately.
    struct GatedChannel {
        gated_order: OrderId,
        entered: Arc<Notify>,
        release: Arc<Notify>,
    }

    #[async_trait]
    impl NotificationChannel for GatedChannel {
        type Message = OrderPayload;

        fn name(&self) -> &'static str {
            "email"
        }

        async fn deliver(&self, order: &OrderPayload) -> ChannelOutcome {
            if order.order_id == self.gated_order {
                self.entered.notify_one();
                self.release.notified().await;
            }
            ChannelOutcome::Sent
        }
    }

    fn payload_with_id(order_id: &str) -> OrderPayload {
        OrderPayload {
            order_id: OrderId::from(order_id),
            ..payload("Asha", "asha@example.com")
        }
    }

    #[tokio::test]
    async fn in_flight_guard_is_scoped_to_one_order() {
        let entered = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        let dispatcher = Arc::new(Dispatcher::new(
            GatedChannel {
                gated_order: OrderId::from("A1"),
                entered: entered.clone(),
                release: release.clone(),
            },
            GatedChannel {
                gated_order: OrderId::from("A1"),
                entered: Arc::new(Notify::new()),
                release: Arc::new(Notify::new()),
            },
        ));
        let (actor, records) = record_actor::new();
        tokio::spawn(actor.run());
        let flow = Arc::new(ResendFlow::new(dispatcher, records.clone()));

        for order_id in ["A1", "B2"] {
            records
                .record_dispatch(OrderRecordCreate {
                    payload: payload_with_id(order_id),
                    email: ChannelOutcome::Failed("relay down".into()),
                    whatsapp: None,
                })
                .await
                .unwrap();
        }

        // Start a resend for A1 that hangs inside the provider call
        let first = {
            let flow = flow.clone();
            tokio::spawn(async move { flow.resend(OrderId::from("A1")).await })
        };
        entered.notified().await;

        // The same order is refused while its resend is in flight
        assert_eq!(
            flow.resend(OrderId::from("A1")).await.unwrap(),
            ResendResolution::AlreadyInFlight
        );

        // An unrelated order resends normally, unblocked by A1
        assert_eq!(
            flow.resend(OrderId::from("B2")).await.unwrap(),
            ResendResolution::Resent
        );

        // Releasing the provider lets A1 finish; its guard entry is gone
        release.notify_one();
        assert_eq!(first.await.unwrap().unwrap(), ResendResolution::Resent);

        // A fresh A1 resend passes the guard (the stored permit releases it)
        release.notify_one();
        assert_eq!(
            flow.resend(OrderId::from("A1")).await.unwrap(),
            ResendResolution::Resent
        );
    }
}
