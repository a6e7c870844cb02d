//! # WhatsApp Channel Adapter (demo stub)
//!
//! Preserves the contract of a real messaging adapter – takes the order
//! payload, refuses locally when no phone number is present, otherwise
//! "delivers" – but performs **no external call**: the formatted message is
//! logged and the outcome is unconditionally `Sent`.
//!
//! Anyone wiring this service to production must replace the body of
//! [`deliver`](NotificationChannel::deliver) with a genuine provider call
//! mirroring the email adapter's success/failure handling. Until then this
//! channel is not trustworthy as a delivery signal.

use crate::channels::format::format_inr;
use crate::model::OrderPayload;
use async_trait::async_trait;
use notify_framework::{ChannelOutcome, NotificationChannel};
use tracing::debug;

/// Local validation failure for payloads without a phone number. This is
/// not a transport failure: no network activity happens.
pub const NO_PHONE_NUMBER: &str = "no phone number provided";

/// The WhatsApp channel adapter (demo stub).
#[derive(Debug, Default, Clone)]
pub struct WhatsAppChannel;

impl WhatsAppChannel {
    pub fn new() -> Self {
        Self
    }

    /// The message a real integration would send.
    fn message_body(order: &OrderPayload) -> String {
        let items = order
            .items
            .iter()
            .map(|item| {
                format!(
                    "{} x {} - {}",
                    item.name,
                    item.quantity,
                    format_inr(item.line_total())
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "🛍️ *Order Confirmation* 🛍️\n\n\
             Dear {name},\n\n\
             Thank you for your order. Here are the details:\n\n\
             *Order ID:* {order_id}\n\
             *Order Total:* {total}\n\n\
             *Items Ordered:*\n{items}\n\n\
             We'll notify you when your order ships.\n\n\
             Thank you for shopping with us!",
            name = order.customer_name,
            order_id = order.order_id,
            total = format_inr(order.order_total),
        )
    }
}

#[async_trait]
impl NotificationChannel for WhatsAppChannel {
    type Message = OrderPayload;

    fn name(&self) -> &'static str {
        "whatsapp"
    }

    async fn deliver(&self, order: &OrderPayload) -> ChannelOutcome {
        let Some(phone_number) = order.phone_number.as_deref() else {
            return ChannelOutcome::Failed(NO_PHONE_NUMBER.to_string());
        };

        let message = Self::message_body(order);
        debug!(order_id = %order.order_id, phone_number, message, "Demo WhatsApp message");

        // Stub: simulate a successful delivery without contacting any provider
        ChannelOutcome::Sent
    }
}
