//! # ActorClient Trait
//!
//! Common read/seed operations for resource-specific clients, built on top of a generic
//! `ResourceClient` and mapped into the client's own error type.
use crate::{ActorEntity, ResourceClient, ResourceError};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard store operations.
///
/// A wrapper only supplies `inner` and `map_error`; `get`, `list` and `insert` come for free.
///
/// ```rust
/// use resource_actor::{ActorClient, ActorEntity, ResourceActor, ResourceClient, ResourceError};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Tag { id: u32 }
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct TagError(String);
///
/// impl ActorEntity for Tag {
///     type Id = u32; type Create = (); type Update = (); type Action = ();
///     type ActionResult = (); type Error = TagError;
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create_params(id: u32, _: ()) -> Result<Self, TagError> { Ok(Self { id }) }
///     fn on_update(&mut self, _: ()) -> Result<(), TagError> { Ok(()) }
///     fn handle_action(&mut self, _: ()) -> Result<(), TagError> { Ok(()) }
/// }
///
/// struct TagClient { inner: ResourceClient<Tag> }
///
/// #[async_trait]
/// impl ActorClient<Tag> for TagClient {
///     type Error = TagError;
///     fn inner(&self) -> &ResourceClient<Tag> { &self.inner }
///     fn map_error(e: ResourceError) -> TagError { TagError(e.to_string()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, inner) = ResourceActor::<Tag>::new(4);
///     tokio::spawn(actor.run());
///     let tags = TagClient { inner };
///     tags.insert(Tag { id: 7 }).await.unwrap();
///     assert!(tags.get(7).await.unwrap().is_some());
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map store errors to the specific resource error type.
    fn map_error(e: ResourceError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every stored entity, in no particular order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Store an entity under its own id.
    #[tracing::instrument(skip(self, item), fields(id = %item.id()))]
    async fn insert(&self, item: T) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().insert(item).await.map_err(Self::map_error)
    }
}
