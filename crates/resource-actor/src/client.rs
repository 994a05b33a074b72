//! # Generic Client
//!
//! This module defines the generic client for communicating with store actors.

use crate::entity::ActorEntity;
use crate::error::ResourceError;
use crate::message::{ResourceRequest, Response};
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `ResourceActor`.
///
/// Holds only the sender half of the request channel, so cloning is cheap and clones can be
/// handed to as many tasks as needed. Every call sends one request and awaits its `oneshot`
/// reply.
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

// Derive would require `T: Clone` bounds on the id/payload types as well.
impl<T: ActorEntity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, ResourceError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| ResourceError::ActorClosed)?;
        response.await.map_err(|_| ResourceError::ActorDropped)?
    }

    /// Creates an entity under a store-generated id and returns it.
    pub async fn create(&self, params: T::Create) -> Result<T, ResourceError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    /// Stores an entity under its own id, replacing any previous value.
    pub async fn insert(&self, item: T) -> Result<(), ResourceError> {
        self.request(|respond_to| ResourceRequest::Insert { item, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, ResourceError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    /// Fetches every known entity among `ids`, in the order of `ids`. Unknown ids are skipped.
    pub async fn get_many(&self, ids: Vec<T::Id>) -> Result<Vec<T>, ResourceError> {
        self.request(|respond_to| ResourceRequest::GetMany { ids, respond_to })
            .await
    }

    pub async fn list(&self) -> Result<Vec<T>, ResourceError> {
        self.request(|respond_to| ResourceRequest::List { respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, ResourceError> {
        self.request(|respond_to| ResourceRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    /// Applies all updates or none of them.
    pub async fn update_many(
        &self,
        updates: Vec<(T::Id, T::Update)>,
    ) -> Result<Vec<T>, ResourceError> {
        self.request(|respond_to| ResourceRequest::UpdateMany {
            updates,
            respond_to,
        })
        .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, ResourceError> {
        self.request(|respond_to| ResourceRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }
}
