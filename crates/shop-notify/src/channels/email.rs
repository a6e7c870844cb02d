//! # Email Channel Adapter
//!
//! Wraps the EmailJS-style relay call: builds the template parameter set
//! from the order payload and POSTs it to the configured endpoint.
//!
//! Success is an HTTP 200 from the provider, nothing else. A non-200
//! response fails with the raw response body as detail; a transport error
//! fails with the error text. Neither is ever propagated as a fault.
//!
//! There is deliberately no retry, no backoff, and no request timeout – a
//! hung provider hangs the dispatch (a documented property of the flow, not
//! an oversight of this adapter).

use crate::channels::format::format_inr;
use crate::config::EmailJsConfig;
use crate::model::OrderPayload;
use async_trait::async_trait;
use notify_framework::{ChannelOutcome, NotificationChannel};
use serde::Serialize;
use tracing::{debug, warn};

/// Template parameters understood by the relay's order-confirmation
/// template.
#[derive(Debug, Serialize)]
struct TemplateParams {
    to_name: String,
    to_email: String,
    order_id: String,
    order_total: String,
    /// Flattened item descriptions, e.g. `"Mug x 2 - ₹1,200"`.
    items: String,
}

/// Wire body of the relay call.
#[derive(Debug, Serialize)]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams,
}

/// The email channel adapter.
pub struct EmailJsChannel {
    config: EmailJsConfig,
    client: reqwest::Client,
}

impl EmailJsChannel {
    pub fn new(config: EmailJsConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn template_params(order: &OrderPayload) -> TemplateParams {
        let items = order
            .items
            .iter()
            .map(|item| {
                format!(
                    "{} x {} - {}",
                    item.name,
                    item.quantity,
                    format_inr(item.line_total())
                )
            })
            .collect::<Vec<_>>()
            .join(", ");

        TemplateParams {
            to_name: order.customer_name.clone(),
            to_email: order.email.clone(),
            order_id: order.order_id.to_string(),
            order_total: format_inr(order.order_total),
            items,
        }
    }
}

#[async_trait]
impl NotificationChannel for EmailJsChannel {
    type Message = OrderPayload;

    fn name(&self) -> &'static str {
        "email"
    }

    async fn deliver(&self, order: &OrderPayload) -> ChannelOutcome {
        let request = EmailJsRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.user_id,
            template_params: Self::template_params(order),
        };
        debug!(order_id = %order.order_id, params = ?request.template_params, "Sending email");

        let response = match self
            .client
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(order_id = %order.order_id, error = %e, "Email transport error");
                return ChannelOutcome::Failed(e.to_string());
            }
        };

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        debug!(order_id = %order.order_id, %status, body, "Provider response");

        // Success iff the provider answered exactly 200
        if status == reqwest::StatusCode::OK {
            ChannelOutcome::Sent
        } else {
            warn!(order_id = %order.order_id, %status, "Provider rejected email");
            ChannelOutcome::Failed(body)
        }
    }
}
