//! Shared helpers for the integration tests: a simulated EmailJS provider
//! and a served application instance.

#![allow(dead_code)]

use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use shop_notify::config::EmailJsConfig;
use shop_notify::lifecycle::NotifySystem;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU16, AtomicUsize, Ordering};
use std::sync::Arc;

/// A local stand-in for the EmailJS relay. The response status can be
/// flipped mid-test; every request is counted.
pub struct StubProvider {
    pub url: String,
    pub hits: Arc<AtomicUsize>,
    status: Arc<AtomicU16>,
}

impl StubProvider {
    pub fn hit_count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn set_status(&self, status: u16) {
        self.status.store(status, Ordering::SeqCst);
    }
}

/// Spawns the stub provider on an ephemeral port.
pub async fn spawn_provider(initial_status: u16, body: &'static str) -> StubProvider {
    let hits = Arc::new(AtomicUsize::new(0));
    let status = Arc::new(AtomicU16::new(initial_status));
    let hits_handler = hits.clone();
    let status_handler = status.clone();

    let app = Router::new().route(
        "/api/v1.0/email/send",
        post(move || {
            let hits = hits_handler.clone();
            let status = status_handler.clone();
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                let code = StatusCode::from_u16(status.load(Ordering::SeqCst))
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (code, body)
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubProvider {
        url: format!("http://{addr}/api/v1.0/email/send"),
        hits,
        status,
    }
}

/// Test credentials pointing the email adapter at the stub provider.
pub fn email_config(endpoint: &str) -> EmailJsConfig {
    EmailJsConfig {
        endpoint: endpoint.to_string(),
        service_id: "service_test".to_string(),
        template_id: "template_test".to_string(),
        user_id: "user_test".to_string(),
    }
}

/// Builds a system against the given provider endpoint and serves its
/// router on an ephemeral port, returning the base URL.
pub async fn serve_system(provider_endpoint: &str) -> (NotifySystem, String) {
    let system = NotifySystem::new(email_config(provider_endpoint));
    let app = system.router();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (system, format!("http://{addr}"))
}

/// The canonical test order, with or without a phone number.
pub fn asha_payload(with_phone: bool) -> serde_json::Value {
    let mut payload = serde_json::json!({
        "customerName": "Asha",
        "email": "asha@example.com",
        "orderId": "X1",
        "orderTotal": 1200,
        "items": [{"name": "Mug", "quantity": 2, "price": 600}]
    });
    if with_phone {
        payload["phoneNumber"] = serde_json::json!("+919999999999");
    }
    payload
}
