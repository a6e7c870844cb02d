//! # NotificationChannel Trait
//!
//! The contract every channel adapter (email relay, messaging gateway, ...)
//! must implement. One adapter owns one provider's call contract: it builds
//! the provider-specific request, issues a single call, and normalizes the
//! result into a [`ChannelOutcome`].

use crate::outcome::ChannelOutcome;
use async_trait::async_trait;

/// A single outbound notification channel.
///
/// # Architecture Note
/// Why a trait? The dispatcher fans one message out to several channels and
/// must treat them uniformly: no ordering between them, no rollback, no
/// coupling. The trait gives every provider the same narrow seam, and test
/// doubles slot in without touching the dispatch logic.
///
/// # Error Handling Contract
/// `deliver` is **infallible by type**. A provider rejection, a transport
/// exception, or a local validation failure must all be folded into
/// [`ChannelOutcome::Failed`] by the implementation – never allowed to
/// escape as a panic or an `Err`. This keeps one channel's outage from
/// aborting its siblings.
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    /// The message type this channel delivers.
    type Message: Send + Sync;

    /// Short channel name used in logs and reports (e.g. `"email"`).
    fn name(&self) -> &'static str;

    /// Attempt exactly one delivery of `message`.
    ///
    /// No retry, no backoff. Callers that want a second attempt call
    /// `deliver` again.
    async fn deliver(&self, message: &Self::Message) -> ChannelOutcome;
}
