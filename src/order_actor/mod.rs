//! Order store: persists orders built by the
//! [`CreateOrderService`](crate::orders::CreateOrderService) and hands them back with their
//! generated ids.

pub mod entity;
pub mod error;

pub use entity::OrderUpdate;
pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use resource_actor::ResourceActor;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}
