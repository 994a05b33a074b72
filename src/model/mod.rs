//! Pure data structures stored by the [`ResourceActor`](resource_actor::ResourceActor)s and
//! exchanged with the order orchestrator.

pub mod customer;
pub mod order;
pub mod product;

pub use customer::*;
pub use order::*;
pub use product::*;
