//! # ActorEntity Trait
//!
//! The contract every resource (Customer, Product, Order, …) implements to be stored by the
//! generic [`ResourceActor`](crate::ResourceActor). Associated types pin down the id, the
//! creation and update payloads and the custom actions, so a `ProductUpdate` can never be sent
//! to the customer store.
//!
//! Hooks are synchronous: an entity only touches its own state. Anything that needs several
//! stores (for example placing an order) is orchestrated outside the actors.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by a `ResourceActor`.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from `u32` so the store can generate ids on `create`.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `CheckStock`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The id under which this entity is stored.
    fn id(&self) -> &Self::Id;

    /// Construct the full entity from a generated id and the creation payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Apply an update in place.
    ///
    /// The store calls this on a copy when running a batch, so a failure leaves the stored
    /// entity untouched.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Handle a custom resource-specific action.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}
