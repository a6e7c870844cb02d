//! # Notify Framework
//!
//! Foundational building blocks for notification services: a per-channel
//! delivery abstraction and a type-safe, actor-based record store.
//!
//! ## Two Halves
//!
//! ### Channels
//!
//! A [`NotificationChannel`] wraps one external delivery provider (an email
//! relay, a messaging gateway, ...). Its single contract is
//! [`deliver`](NotificationChannel::deliver): take a message, attempt one
//! delivery, and fold the result into a [`ChannelOutcome`]. Transport faults
//! are **never** propagated as errors – they become
//! [`ChannelOutcome::Failed`] values, so a caller fanning out to several
//! channels can treat every outcome uniformly and no single provider outage
//! can abort the others.
//!
//! ### Record Store
//!
//! The [`RecordActor`] manages delivery records (or any other keyed record
//! type) behind a message-passing interface. It implements the classic
//! Tokio actor pattern:
//!
//! - Isolated state (no shared memory, no locks)
//! - Message-passing over an mpsc channel, responses over oneshot channels
//! - Sequential processing within the actor eliminates race conditions
//!
//! The actor owns the records; callers hold only a cheap, cloneable
//! [`RecordClient`]. This mirrors the way a UI should hold a read reference
//! to delivery state rather than owning it.
//!
//! ## Core Abstractions
//!
//! 1. **Entity Layer** ([`RecordEntity`]) – your record type and its
//!    create/update semantics.
//! 2. **Runtime Layer** ([`RecordActor`]) – message processing and
//!    concurrency.
//! 3. **Interface Layer** ([`RecordClient`]) – type-safe communication.
//!
//! ```rust
//! use notify_framework::{RecordActor, RecordEntity};
//! use async_trait::async_trait;
//!
//! // 1. Define the record
//! #[derive(Clone, Debug)]
//! struct Receipt {
//!     id: String,
//!     delivered: bool,
//! }
//!
//! #[derive(Debug)]
//! struct ReceiptCreate {
//!     id: String,
//! }
//!
//! #[derive(Debug)]
//! struct ReceiptUpdate {
//!     delivered: bool,
//! }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("receipt error")]
//! struct ReceiptError;
//!
//! #[async_trait]
//! impl RecordEntity for Receipt {
//!     type Id = String;
//!     type Create = ReceiptCreate;
//!     type Update = ReceiptUpdate;
//!     type Error = ReceiptError;
//!
//!     fn from_create_params(params: ReceiptCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id: params.id, delivered: false })
//!     }
//!
//!     fn id(&self) -> &String {
//!         &self.id
//!     }
//!
//!     async fn on_update(&mut self, update: ReceiptUpdate) -> Result<(), Self::Error> {
//!         self.delivered = update.delivered;
//!         Ok(())
//!     }
//! }
//!
//! // 2. Use the actor
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = RecordActor::<Receipt>::new(10);
//!     tokio::spawn(actor.run());
//!
//!     let id = client
//!         .create(ReceiptCreate { id: "order_1".into() })
//!         .await
//!         .unwrap();
//!     let receipt = client.get(id).await.unwrap().unwrap();
//!     assert!(!receipt.delivered);
//! }
//! ```
//!
//! ## Identity & Upsert
//!
//! Unlike a classic CRUD store that mints its own surrogate ids, records
//! here carry **externally supplied** identity (an order id handed over by
//! checkout). [`RecordEntity::id`] exposes it and `Create` is an upsert:
//! re-dispatching the same order replaces its record rather than failing.
//!
//! ## Testing
//!
//! The [`mock`] module provides a [`MockClient`](mock::MockClient) that
//! implements the same `RecordClient<T>` API entirely in-memory, so client
//! logic can be tested without spawning any actors.

pub mod actor;
pub mod channel;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod outcome;
pub mod tracing;

// Re-export core types for convenience
pub use actor::RecordActor;
pub use channel::NotificationChannel;
pub use client::RecordClient;
pub use client_trait::StoreClient;
pub use entity::RecordEntity;
pub use error::StoreError;
pub use message::{RecordRequest, Response};
pub use outcome::ChannelOutcome;
