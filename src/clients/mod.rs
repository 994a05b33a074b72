//! Type-safe wrappers around [`ResourceClient`](resource_actor::ResourceClient).
//!
//! Each client hides the message passing behind domain methods and implements the matching
//! [`ports`](crate::ports) trait, which makes it the in-memory adapter for that port.

pub mod customer_client;
pub mod order_client;
pub mod product_client;

pub use customer_client::*;
pub use order_client::*;
pub use product_client::*;
