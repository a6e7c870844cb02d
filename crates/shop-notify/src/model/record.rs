//! The order record tracked by the store actor.
//!
//! This replaces the storefront's browser session storage: instead of two
//! JSON blobs in `sessionStorage`, the service owns an explicit record per
//! order and callers hold only a client handle.

use crate::model::{OrderId, OrderPayload};
use chrono::{DateTime, Utc};
use notify_framework::ChannelOutcome;
use serde::{Deserialize, Serialize};

/// Delivery state for one dispatched order.
///
/// Invariant: `whatsapp` is `Some` only if the payload carried a phone
/// number. No phone number means the channel was never attempted and is
/// never displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: OrderId,
    pub order_date: DateTime<Utc>,
    /// Full payload retained so a resend can be reconstructed.
    pub payload: OrderPayload,
    pub email: ChannelOutcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<ChannelOutcome>,
}

/// Payload for creating (or refreshing) an order record after a dispatch.
#[derive(Debug, Clone)]
pub struct OrderRecordCreate {
    pub payload: OrderPayload,
    pub email: ChannelOutcome,
    pub whatsapp: Option<ChannelOutcome>,
}

/// Payload for updating per-channel outcomes on an existing record.
///
/// A resend only touches the email outcome; fields left `None` are
/// untouched.
#[derive(Debug, Clone, Default)]
pub struct OrderRecordUpdate {
    pub email: Option<ChannelOutcome>,
    pub whatsapp: Option<ChannelOutcome>,
}

impl OrderRecord {
    pub fn phone_number(&self) -> Option<&str> {
        self.payload.phone_number.as_deref()
    }
}
