//! # Store Errors
//!
//! Errors reported by a [`ResourceActor`](crate::ResourceActor) or the channel in front of it.
//! Entity-level failures are boxed into [`ResourceError::EntityError`] so the runtime stays
//! generic over every entity's own error type.

/// Errors that can occur within the resource store runtime.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
