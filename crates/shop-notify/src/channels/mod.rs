//! # Channel Adapters
//!
//! One module per external notification provider. Each adapter implements
//! [`NotificationChannel`](notify_framework::NotificationChannel) for
//! [`OrderPayload`](crate::model::OrderPayload): one outbound call (or a
//! local refusal), folded into a
//! [`ChannelOutcome`](notify_framework::ChannelOutcome).

pub mod email;
pub mod format;
pub mod whatsapp;

pub use email::EmailJsChannel;
pub use whatsapp::WhatsAppChannel;
