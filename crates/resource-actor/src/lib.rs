//! # Resource Actor
//!
//! In-process stores built on the Actor Model. Each resource type gets one
//! [`ResourceActor`] that owns a `HashMap` of entities inside its own Tokio task, and any
//! number of cheap [`ResourceClient`] handles that talk to it over an `mpsc` channel.
//!
//! ## Why actors for a store?
//!
//! - State is owned by a single task, so there are no locks around the map.
//! - Requests are processed one at a time, so a batch request (`get_many`, `update_many`)
//!   sees and leaves a consistent map.
//! - Dropping every client closes the channel and the actor shuts down on its own.
//!
//! What the actors do *not* do is coordinate with each other. Two requests sent by one caller
//! to two different stores are two independent steps.
//!
//! ## Layers
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the domain type and how it is created, updated and acted on
//! 2. **Runtime Layer** ([`ResourceActor`]) - the request loop and the map
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed async calls
//!
//! ## Example
//!
//! ```rust
//! use resource_actor::{ActorEntity, ResourceActor};
//!
//! #[derive(Clone, Debug)]
//! struct Counter { id: u32, value: u64 }
//!
//! #[derive(Debug)] struct CounterCreate;
//! #[derive(Debug)] enum CounterAction { Increment }
//! #[derive(Debug, thiserror::Error)] #[error("counter error")] struct CounterError;
//!
//! impl ActorEntity for Counter {
//!     type Id = u32;
//!     type Create = CounterCreate;
//!     type Update = u64;
//!     type Action = CounterAction;
//!     type ActionResult = u64;
//!     type Error = CounterError;
//!
//!     fn id(&self) -> &u32 { &self.id }
//!     fn from_create_params(id: u32, _: CounterCreate) -> Result<Self, CounterError> {
//!         Ok(Self { id, value: 0 })
//!     }
//!     fn on_update(&mut self, value: u64) -> Result<(), CounterError> {
//!         self.value = value;
//!         Ok(())
//!     }
//!     fn handle_action(&mut self, action: CounterAction) -> Result<u64, CounterError> {
//!         match action {
//!             CounterAction::Increment => { self.value += 1; Ok(self.value) }
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Counter>::new(10);
//!     tokio::spawn(actor.run());
//!
//!     let counter = client.create(CounterCreate).await.unwrap();
//!     let value = client.perform_action(counter.id, CounterAction::Increment).await.unwrap();
//!     assert_eq!(value, 1);
//!
//!     // Batches are all-or-nothing: the unknown id rejects the whole request.
//!     let result = client.update_many(vec![(counter.id, 10), (99, 20)]).await;
//!     assert!(result.is_err());
//!     assert_eq!(client.get(counter.id).await.unwrap().unwrap().value, 1);
//! }
//! ```
//!
//! ## Testing
//!
//! See [`mock`] for scripted clients that answer without spawning an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::ResourceError;
pub use message::{ResourceRequest, Response};
