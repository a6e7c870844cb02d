//! # Shop Notify Service
//!
//! Entry point: set up tracing, load provider configuration from the
//! environment, assemble the [`NotifySystem`], and serve the HTTP
//! endpoints until interrupted.
//!
//! ```bash
//! RUST_LOG=info \
//! EMAILJS_SERVICE_ID=... EMAILJS_TEMPLATE_ID=... EMAILJS_USER_ID=... \
//! cargo run -p shop-notify
//! ```

use notify_framework::tracing::setup_tracing;
use shop_notify::config::{self, EmailJsConfig};
use shop_notify::lifecycle::NotifySystem;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    // Credentials come from the environment, never from source
    let email_config = EmailJsConfig::from_env().map_err(|e| e.to_string())?;

    info!("Starting order confirmation notification service");
    let system = NotifySystem::new(email_config);
    let app = system.router();

    let bind_addr = config::bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| format!("bind {bind_addr} failed: {e}"))?;
    info!(%bind_addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await
        .map_err(|e| format!("server failed: {e}"))?;

    // Drain the store actor before exiting
    system.shutdown().await?;

    info!("Service stopped");
    Ok(())
}
