//! # Order Confirmation Dispatcher
//!
//! Coordinates the notification channels for one order: the email channel
//! is always attempted; the WhatsApp channel only when the payload carries
//! a phone number. The two attempts are independent – no ordering between
//! them, no rollback, no coupling – and there is no deduplication:
//! dispatching the same payload twice sends two sets of notifications.

use crate::model::OrderPayload;
use notify_framework::{ChannelOutcome, NotificationChannel};
use serde::Serialize;
use tracing::{info, instrument};

/// Per-channel outcomes of one dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchOutcomes {
    pub email: ChannelOutcome,
    /// `None` iff the payload had no phone number – the channel was never
    /// attempted, so it is absent rather than failed.
    pub whatsapp: Option<ChannelOutcome>,
}

impl DispatchOutcomes {
    /// Overall success: every *attempted* channel succeeded.
    pub fn success(&self) -> bool {
        self.email.is_sent() && self.whatsapp.as_ref().is_none_or(ChannelOutcome::is_sent)
    }

    pub fn into_report(self) -> DispatchReport {
        DispatchReport {
            success: self.success(),
            email: ChannelReport::from(&self.email),
            whatsapp: self.whatsapp.as_ref().map(ChannelReport::from),
        }
    }
}

/// Wire form of one channel's outcome: `{ "success": bool, "error"?: str }`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChannelReport {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&ChannelOutcome> for ChannelReport {
    fn from(outcome: &ChannelOutcome) -> Self {
        match outcome {
            ChannelOutcome::Sent => Self {
                success: true,
                error: None,
            },
            ChannelOutcome::Pending => Self {
                success: false,
                error: None,
            },
            ChannelOutcome::Failed(reason) => Self {
                success: false,
                error: Some(reason.clone()),
            },
        }
    }
}

/// Wire form of a whole dispatch:
/// `{ success, email: {...}, whatsapp?: {...} }`. The `whatsapp` key is
/// entirely absent when the order had no phone number.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchReport {
    pub success: bool,
    pub email: ChannelReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<ChannelReport>,
}

/// The dispatcher, generic over its two channels so tests can substitute
/// doubles without touching the coordination logic.
pub struct Dispatcher<E, W> {
    email: E,
    whatsapp: W,
}

/// The production channel pairing.
pub type LiveDispatcher =
    Dispatcher<crate::channels::EmailJsChannel, crate::channels::WhatsAppChannel>;

impl<E, W> Dispatcher<E, W>
where
    E: NotificationChannel<Message = OrderPayload>,
    W: NotificationChannel<Message = OrderPayload>,
{
    pub fn new(email: E, whatsapp: W) -> Self {
        Self { email, whatsapp }
    }

    /// Dispatches one order to all applicable channels.
    #[instrument(skip(self, order), fields(order_id = %order.order_id))]
    pub async fn dispatch(&self, order: &OrderPayload) -> DispatchOutcomes {
        let outcomes = if order.phone_number.is_some() {
            // Independent awaited calls, no ordering guarantee between them
            let (email, whatsapp) =
                tokio::join!(self.email.deliver(order), self.whatsapp.deliver(order));
            DispatchOutcomes {
                email,
                whatsapp: Some(whatsapp),
            }
        } else {
            DispatchOutcomes {
                email: self.email.deliver(order).await,
                whatsapp: None,
            }
        };

        info!(
            success = outcomes.success(),
            email = %outcomes.email,
            whatsapp = outcomes.whatsapp.as_ref().map(ToString::to_string),
            "Dispatch complete"
        );
        outcomes
    }

    /// Re-attempts the email channel only, for the manual resend flow.
    #[instrument(skip(self, order), fields(order_id = %order.order_id))]
    pub async fn resend_email(&self, order: &OrderPayload) -> ChannelOutcome {
        let outcome = self.email.deliver(order).await;
        info!(outcome = %outcome, "Email resend complete");
        outcome
    }
}
