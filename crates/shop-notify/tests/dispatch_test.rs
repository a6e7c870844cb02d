//! End-to-end tests for the dispatcher endpoint, exercising the served
//! router against a simulated EmailJS provider.
//!
//! The spawned server task holds its own store-client clone, so these
//! tests drop the system rather than awaiting a full shutdown; the
//! shutdown path has its own test in `lifecycle_test.rs`.

mod common;

use common::{asha_payload, serve_system, spawn_provider};
use serde_json::Value;

#[tokio::test]
async fn dispatch_with_phone_sends_on_both_channels() {
    let provider = spawn_provider(200, "OK").await;
    let (_system, base) = serve_system(&provider.url).await;

    let report: Value = reqwest::Client::new()
        .post(format!("{base}/send-order-confirmation"))
        .json(&asha_payload(true))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(report["success"], Value::Bool(true));
    assert_eq!(report["email"]["success"], Value::Bool(true));
    assert_eq!(report["whatsapp"]["success"], Value::Bool(true));
    assert_eq!(provider.hit_count(), 1);
}

#[tokio::test]
async fn dispatch_without_phone_omits_whatsapp() {
    let provider = spawn_provider(200, "OK").await;
    let (_system, base) = serve_system(&provider.url).await;

    let report: Value = reqwest::Client::new()
        .post(format!("{base}/send-order-confirmation"))
        .json(&asha_payload(false))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(report["success"], Value::Bool(true));
    // The key is absent, not null and not failed
    assert!(report.get("whatsapp").is_none());

    // The stored record mirrors that: the status view has no whatsapp block
    let status: Value = reqwest::get(format!("{base}/orders/X1/status"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(status["email"]["status"], Value::String("sent".into()));
    assert!(status.get("whatsapp").is_none());
}

#[tokio::test]
async fn provider_rejection_fails_email_but_not_whatsapp() {
    let provider = spawn_provider(400, "bad template").await;
    let (_system, base) = serve_system(&provider.url).await;

    let report: Value = reqwest::Client::new()
        .post(format!("{base}/send-order-confirmation"))
        .json(&asha_payload(true))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(report["success"], Value::Bool(false));
    assert_eq!(report["email"]["success"], Value::Bool(false));
    // The provider's response body is surfaced verbatim as the reason
    assert_eq!(report["email"]["error"], Value::String("bad template".into()));
    // The messaging channel is unaffected by the email failure
    assert_eq!(report["whatsapp"]["success"], Value::Bool(true));
}

#[tokio::test]
async fn repeated_dispatch_is_not_deduplicated() {
    let provider = spawn_provider(200, "OK").await;
    let (_system, base) = serve_system(&provider.url).await;
    let client = reqwest::Client::new();

    for _ in 0..2 {
        let report: Value = client
            .post(format!("{base}/send-order-confirmation"))
            .json(&asha_payload(false))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(report["success"], Value::Bool(true));
    }

    // Same order posted twice means two provider calls
    assert_eq!(provider.hit_count(), 2);
}

#[tokio::test]
async fn unreachable_provider_is_a_failure_outcome_not_a_fault() {
    // Nothing listens here; the connect error must come back in the report
    let (_system, base) = serve_system("http://127.0.0.1:9/api/v1.0/email/send").await;

    let response = reqwest::Client::new()
        .post(format!("{base}/send-order-confirmation"))
        .json(&asha_payload(false))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let report: Value = response.json().await.unwrap();
    assert_eq!(report["success"], Value::Bool(false));
    assert!(report["email"]["error"].as_str().is_some());
}
