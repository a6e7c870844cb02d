//! # Store Messages
//!
//! The message types exchanged between a [`RecordClient`](crate::client::RecordClient)
//! and its [`RecordActor`](crate::actor::RecordActor).

use crate::entity::RecordEntity;
use crate::error::StoreError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Request sent to the record actor.
///
/// # Lifecycle Operations
/// The variants map to the lifecycle of a delivery record:
///
/// - **Create**: written after a dispatch (upsert – re-dispatching the same
///   order replaces the record).
/// - **Get**: read by the status view.
/// - **Update**: mutated by a resend resolving.
/// - **Delete**: discarded when the owning session ends.
///
/// The enum is generic over `T: RecordEntity` and uses the associated DTO
/// types, so a request for one record type cannot be sent to another
/// store.
#[derive(Debug)]
pub enum RecordRequest<T: RecordEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete { id: T::Id, respond_to: Response<()> },
}
