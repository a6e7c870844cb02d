//! # System Lifecycle & Orchestration
//!
//! Wiring lives here, not in the components: the record actor is spawned,
//! the channel adapters are built from configuration, the dispatcher and
//! resend flow are assembled over them, and the axum router is handed back
//! ready to serve.
//!
//! ## Graceful Shutdown
//!
//! The store actor exits when the last client is dropped:
//!
//! 1. **Drop all clients** – closes the sender side of the channel
//! 2. **The actor detects closure** – `receiver.recv()` returns `None`
//! 3. **The actor cleans up** – processes remaining messages, logs final
//!    state
//! 4. **Await completion** – wait for the actor task to finish
//!
//! ## Observability
//!
//! [`notify_framework::tracing::setup_tracing`] initializes structured
//! logging for the entire system; `RUST_LOG` controls verbosity.

pub mod system;

pub use system::*;
