//! # Generic Messages
//!
//! Requests sent from a [`ResourceClient`](crate::ResourceClient) to its
//! [`ResourceActor`](crate::ResourceActor). Every variant carries a `oneshot` sender the actor
//! answers on.

use crate::entity::ActorEntity;
use crate::error::ResourceError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, ResourceError>>;

/// Internal message type sent to the actor to request operations.
///
/// The single-entity variants map to Create / Read / Update plus a custom `Action`. The
/// batch variants (`GetMany`, `UpdateMany`) are handled inside one loop iteration, so no
/// other request can interleave with them.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    /// Create with a store-generated id.
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    /// Store an entity under its own id, replacing any previous value.
    Insert { item: T, respond_to: Response<()> },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    GetMany {
        ids: Vec<T::Id>,
        respond_to: Response<Vec<T>>,
    },
    List { respond_to: Response<Vec<T>> },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    UpdateMany {
        updates: Vec<(T::Id, T::Update)>,
        respond_to: Response<Vec<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
