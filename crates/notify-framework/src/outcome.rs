//! # Channel Outcomes
//!
//! The tagged per-channel result of attempting one notification delivery.
//!
//! Every channel adapter boundary converts its result – provider response,
//! transport fault, or local validation failure – into one of these values.
//! Nothing past the adapter ever sees a raw transport error.

use serde::{Deserialize, Serialize};

/// Result of attempting (or not yet attempting) one notification channel.
///
/// The taxonomy is deliberately small:
///
/// - [`Pending`](ChannelOutcome::Pending) – the channel has not been
///   attempted yet.
/// - [`Sent`](ChannelOutcome::Sent) – the provider accepted the message.
/// - [`Failed`](ChannelOutcome::Failed) – anything else: a non-success
///   provider response (carrying the raw response body), a transport
///   exception (carrying the error text), or a local validation failure
///   (e.g. a missing phone number).
///
/// There is no retry count and no delivery timestamp; an outcome describes
/// exactly one attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "lowercase")]
pub enum ChannelOutcome {
    Pending,
    Sent,
    Failed(String),
}

impl ChannelOutcome {
    /// True only for [`ChannelOutcome::Sent`].
    pub fn is_sent(&self) -> bool {
        matches!(self, ChannelOutcome::Sent)
    }

    /// The failure reason, if this outcome is a failure.
    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            ChannelOutcome::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

impl std::fmt::Display for ChannelOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelOutcome::Pending => write!(f, "pending"),
            ChannelOutcome::Sent => write!(f, "sent"),
            ChannelOutcome::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sent_is_the_only_success() {
        assert!(ChannelOutcome::Sent.is_sent());
        assert!(!ChannelOutcome::Pending.is_sent());
        assert!(!ChannelOutcome::Failed("boom".into()).is_sent());
    }

    #[test]
    fn failure_reason_only_on_failed() {
        assert_eq!(
            ChannelOutcome::Failed("no phone number provided".into()).failure_reason(),
            Some("no phone number provided")
        );
        assert_eq!(ChannelOutcome::Sent.failure_reason(), None);
        assert_eq!(ChannelOutcome::Pending.failure_reason(), None);
    }

    #[test]
    fn serializes_with_status_tag() {
        let json = serde_json::to_value(ChannelOutcome::Failed("timeout".into())).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["reason"], "timeout");

        let json = serde_json::to_value(ChannelOutcome::Sent).unwrap();
        assert_eq!(json["status"], "sent");
    }
}
