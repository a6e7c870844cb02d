//! # HTTP Surface
//!
//! The axum endpoints:
//!
//! - `POST /send-order-confirmation` – the dispatcher endpoint. JSON body
//!   is the order payload; the response is the combined dispatch report.
//!   There is no authentication and no deduplication: posting the same
//!   payload twice sends two sets of notifications.
//! - `GET /orders/{order_id}/status` – the status view's read model.
//! - `POST /orders/{order_id}/resend` – the manual email resend.

use crate::channels::{EmailJsChannel, WhatsAppChannel};
use crate::clients::OrderRecordClient;
use crate::dispatch::{DispatchReport, LiveDispatcher};
use crate::model::{OrderId, OrderPayload, OrderRecordCreate};
use crate::record_actor::RecordError;
use crate::status::{OrderStatusView, ResendFlow, ResendResolution};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

/// Shared handler state: the dispatcher, the record store handle, and the
/// resend flow built over both.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<LiveDispatcher>,
    pub records: OrderRecordClient,
    pub resend: Arc<ResendFlow<EmailJsChannel, WhatsAppChannel>>,
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/send-order-confirmation", post(send_order_confirmation))
        .route("/orders/{order_id}/status", get(order_status))
        .route("/orders/{order_id}/resend", post(resend_confirmation))
        .with_state(state)
}

/// The dispatcher endpoint: fan the order out to both channels, record the
/// outcomes, return the combined report.
async fn send_order_confirmation(
    State(state): State<AppState>,
    Json(payload): Json<OrderPayload>,
) -> Json<DispatchReport> {
    info!(order_id = %payload.order_id, "Confirmation dispatch requested");

    let outcomes = state.dispatcher.dispatch(&payload).await;

    // The notifications have already been attempted; a store hiccup must
    // not turn them into a reported failure.
    let create = OrderRecordCreate {
        payload,
        email: outcomes.email.clone(),
        whatsapp: outcomes.whatsapp.clone(),
    };
    if let Err(e) = state.records.record_dispatch(create).await {
        warn!(error = %e, "Failed to record dispatch outcomes");
    }

    Json(outcomes.into_report())
}

/// The status view's read model.
async fn order_status(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Response {
    match state.resend.load(OrderId(order_id)).await {
        Ok(OrderStatusView::Loaded(summary)) => Json(summary).into_response(),
        Ok(OrderStatusView::NotFound) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "no order found" })),
        )
            .into_response(),
        Err(e) => store_error_response(e),
    }
}

/// Wire form of a resend attempt.
#[derive(Debug, Serialize)]
pub struct ResendResponse {
    pub resent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The manual email resend.
async fn resend_confirmation(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Response {
    match state.resend.resend(OrderId(order_id)).await {
        Ok(resolution) => {
            let (status, body) = match resolution {
                ResendResolution::Resent => (
                    StatusCode::OK,
                    ResendResponse {
                        resent: true,
                        error: None,
                    },
                ),
                ResendResolution::ResendFailed(reason) => (
                    StatusCode::OK,
                    ResendResponse {
                        resent: false,
                        error: Some(reason),
                    },
                ),
                ResendResolution::MissingContact => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ResendResponse {
                        resent: false,
                        error: Some("missing customer name or email".to_string()),
                    },
                ),
                ResendResolution::AlreadyInFlight => (
                    StatusCode::CONFLICT,
                    ResendResponse {
                        resent: false,
                        error: Some("a resend is already in progress for this order".to_string()),
                    },
                ),
            };
            (status, Json(body)).into_response()
        }
        Err(e) => store_error_response(e),
    }
}

fn store_error_response(e: RecordError) -> Response {
    match e {
        RecordError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("no order found: {id}") })),
        )
            .into_response(),
        other => {
            warn!(error = %other, "Store error while serving request");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": other.to_string() })),
            )
                .into_response()
        }
    }
}
