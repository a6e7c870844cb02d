//! RecordEntity trait implementation for [`OrderRecord`].
//!
//! This is what lets the generic
//! [`RecordActor`](notify_framework::RecordActor) manage order records.

use crate::model::{OrderId, OrderRecord, OrderRecordCreate, OrderRecordUpdate};
use crate::record_actor::RecordError;
use async_trait::async_trait;
use chrono::Utc;
use notify_framework::RecordEntity;

#[async_trait]
impl RecordEntity for OrderRecord {
    type Id = OrderId;
    type Create = OrderRecordCreate;
    type Update = OrderRecordUpdate;
    type Error = RecordError;

    /// Builds the record from a dispatch result, stamping the order date.
    ///
    /// Enforces the channel invariant: a WhatsApp outcome may only exist
    /// when the payload carried a phone number.
    fn from_create_params(params: OrderRecordCreate) -> Result<Self, Self::Error> {
        if params.whatsapp.is_some() && params.payload.phone_number.is_none() {
            return Err(RecordError::ValidationError(
                "whatsapp outcome recorded without a phone number".to_string(),
            ));
        }

        Ok(Self {
            id: params.payload.order_id.clone(),
            order_date: Utc::now(),
            payload: params.payload,
            email: params.email,
            whatsapp: params.whatsapp,
        })
    }

    fn id(&self) -> &OrderId {
        &self.id
    }

    /// Applies per-channel outcome updates; fields left `None` are
    /// untouched. The same invariant as creation applies: no WhatsApp
    /// outcome without a phone number.
    async fn on_update(&mut self, update: OrderRecordUpdate) -> Result<(), Self::Error> {
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(whatsapp) = update.whatsapp {
            if self.payload.phone_number.is_none() {
                return Err(RecordError::ValidationError(
                    "whatsapp outcome recorded without a phone number".to_string(),
                ));
            }
            self.whatsapp = Some(whatsapp);
        }
        Ok(())
    }
}
