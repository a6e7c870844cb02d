//! # Shop Notify
//!
//! Order-confirmation notification service for the storefront. After
//! checkout, an order payload is POSTed to this service, which fans it out
//! to two notification channels (email via an EmailJS-style relay, WhatsApp
//! as a stubbed demo channel), records the per-channel outcomes in an
//! order-record store, and supports a manual email resend.
//!
//! ## 🚀 Core Components
//!
//! - **[model]**: The wire and store data types ([`OrderPayload`](model::OrderPayload),
//!   [`OrderRecord`](model::OrderRecord)).
//! - **[channels]**: The channel adapters – one per external provider.
//! - **[dispatch]**: The [`Dispatcher`](dispatch::Dispatcher) coordinating both channels for one order.
//! - **[record_actor]**: The order-record store actor ([`RecordEntity`](notify_framework::RecordEntity) impl).
//! - **[clients]**: [`OrderRecordClient`](clients::OrderRecordClient), the typed handle to the store.
//! - **[status]**: The order-status view and manual resend flow.
//! - **[http]**: The axum endpoints.
//! - **[lifecycle]**: Orchestration – wiring the store, dispatcher, and router.
//!
//! ## Endpoint Summary
//!
//! - `POST /send-order-confirmation` – dispatch both channels for an order
//!   payload and record the outcomes. **Unauthenticated** (a known gap
//!   inherited from the storefront; nothing in the source system defines an
//!   authorization scheme for this call).
//! - `GET /orders/{order_id}/status` – the status view's read model.
//! - `POST /orders/{order_id}/resend` – manual email resend.
//!
//! ## 🧪 Testing
//!
//! See [`notify_framework::mock`] for utilities to test clients without
//! spawning full actors, and `tests/` for end-to-end flows against a
//! simulated provider.

pub mod channels;
pub mod clients;
pub mod config;
pub mod dispatch;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod record_actor;
pub mod status;
