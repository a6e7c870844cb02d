//! The runtime orchestrator for the notification service.

use crate::channels::{EmailJsChannel, WhatsAppChannel};
use crate::clients::OrderRecordClient;
use crate::config::EmailJsConfig;
use crate::dispatch::{Dispatcher, LiveDispatcher};
use crate::http::{self, AppState};
use crate::record_actor;
use crate::status::ResendFlow;
use axum::Router;
use std::sync::Arc;
use tracing::{error, info};

/// The assembled notification service.
///
/// `NotifySystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the store actor
/// - **Dependency Wiring**: building the channel adapters from config and
///   assembling the dispatcher and resend flow over them
/// - **Serving**: producing the axum router bound to all of the above
pub struct NotifySystem {
    /// Handle to the order-record store.
    pub records: OrderRecordClient,

    /// The channel coordinator for one order.
    pub dispatcher: Arc<LiveDispatcher>,

    /// The status view / manual resend driver.
    pub resend: Arc<ResendFlow<EmailJsChannel, WhatsAppChannel>>,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl NotifySystem {
    /// Creates and initializes the system with the store actor running.
    pub fn new(email_config: EmailJsConfig) -> Self {
        // 1. Create the store actor and its client
        let (record_actor, records) = record_actor::new();

        // 2. Start it; the actor runs until the last client is dropped
        let record_handle = tokio::spawn(record_actor.run());

        // 3. Build the channels and the coordinators over them
        let dispatcher = Arc::new(Dispatcher::new(
            EmailJsChannel::new(email_config),
            WhatsAppChannel::new(),
        ));
        let resend = Arc::new(ResendFlow::new(dispatcher.clone(), records.clone()));

        Self {
            records,
            dispatcher,
            resend,
            handles: vec![record_handle],
        }
    }

    /// The application router over this system's state.
    pub fn router(&self) -> Router {
        http::router(AppState {
            dispatcher: self.dispatcher.clone(),
            records: self.records.clone(),
            resend: self.resend.clone(),
        })
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops all clients (closing the store channel), then waits for the
    /// actor tasks to complete. Returns an error if any task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // Dropping the clients closes the store's mpsc channel; the actor
        // drains remaining messages and exits. The resend flow holds a
        // records clone, so it must go too.
        drop(self.resend);
        drop(self.dispatcher);
        drop(self.records);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
