//! The order payload submitted for confirmation dispatch.
//!
//! Field names serialize in camelCase to match the checkout client's wire
//! format (`customerName`, `phoneNumber`, ...). The payload is immutable
//! once dispatched; the store keeps a copy so a resend can be reconstructed
//! without the original caller.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for orders.
///
/// Minted by checkout, not by this service – the store keys records by the
/// id the payload arrives with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub String);

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One ordered line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

impl OrderItem {
    /// Price for the full line (unit price × quantity).
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Structured order data submitted for confirmation dispatch.
///
/// `phone_number` is optional: without it the messaging channel is never
/// attempted and never reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub customer_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub order_id: OrderId,
    pub order_total: f64,
    pub items: Vec<OrderItem>,
}

impl OrderPayload {
    /// True when both contact fields needed for an email (re)send are
    /// present. A resend must not reach the network without them.
    pub fn has_email_contact(&self) -> bool {
        !self.customer_name.trim().is_empty() && !self.email.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload_json() -> serde_json::Value {
        serde_json::json!({
            "customerName": "Asha",
            "email": "asha@example.com",
            "phoneNumber": "+919999999999",
            "orderId": "X1",
            "orderTotal": 1200,
            "items": [{"name": "Mug", "quantity": 2, "price": 600}]
        })
    }

    #[test]
    fn deserializes_camel_case_wire_format() {
        let payload: OrderPayload = serde_json::from_value(payload_json()).unwrap();
        assert_eq!(payload.customer_name, "Asha");
        assert_eq!(payload.order_id, OrderId::from("X1"));
        assert_eq!(payload.phone_number.as_deref(), Some("+919999999999"));
        assert_eq!(payload.items[0].line_total(), 1200.0);
    }

    #[test]
    fn phone_number_is_optional() {
        let mut json = payload_json();
        json.as_object_mut().unwrap().remove("phoneNumber");
        let payload: OrderPayload = serde_json::from_value(json).unwrap();
        assert!(payload.phone_number.is_none());
    }

    #[test]
    fn email_contact_requires_both_fields() {
        let mut payload: OrderPayload = serde_json::from_value(payload_json()).unwrap();
        assert!(payload.has_email_contact());

        payload.email = "  ".into();
        assert!(!payload.has_email_contact());

        payload.email = "asha@example.com".into();
        payload.customer_name = String::new();
        assert!(!payload.has_email_contact());
    }
}
