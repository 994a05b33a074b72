//! Error types for the Product store.

use resource_actor::ResourceError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// Prices must not be negative.
    #[error("Invalid price: {0}")]
    InvalidPrice(Decimal),

    /// An error occurred while communicating with the store actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<ResourceError> for ProductError {
    fn from(e: ResourceError) -> Self {
        match e {
            ResourceError::NotFound(id) => ProductError::NotFound(id),
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}
