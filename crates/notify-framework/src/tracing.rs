//! # Observability & Tracing
//!
//! Tracing infrastructure for the whole notification system.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: store startup, shutdown, and final state
//! - **Record operations**: Create, Get, Update, Delete with record ids
//! - **Channel deliveries**: per-channel outcomes with failure reasons
//! - **Request flow**: hierarchical spans from the HTTP handler down to the
//!   provider call
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads
//! ```
//!
//! With `RUST_LOG=debug`, entry points log full payloads once via the
//! `debug!(?payload, ...)` structured-field syntax; all subsequent lines
//! stay concise, showing only the workflow hierarchy.

/// Initializes structured logging for the entire application.
///
/// Call once at startup. The `RUST_LOG` environment variable controls the
/// filter.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use record_type/channel fields instead
        .compact() // Compact format shows spans inline (e.g., "resend:dispatch")
        .init();
}
