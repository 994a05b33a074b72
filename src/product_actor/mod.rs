//! # Product Store
//!
//! Products with their current price and stock level. Besides CRUD it answers batch lookups
//! and batch stock updates, which is what the order orchestrator uses through the
//! [`ProductCatalog`](crate::ports::ProductCatalog) port.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`actions`] - [`ProductAction`] and [`ProductActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use order_recipe::product_actor;
//! use order_recipe::model::Product;
//! use resource_actor::ActorClient;
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = product_actor::new(32);
//!     tokio::spawn(actor.run());
//!
//!     client.insert(Product::new("P1", "Widget", Decimal::new(2999, 2), 100)).await?;
//!     assert_eq!(client.check_stock("P1".into()).await?, 100);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ProductClient;
use crate::model::Product;
use resource_actor::ResourceActor;

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ProductClient::new(generic_client))
}
