//! [`ActorEntity`] implementation for the [`Order`] model.
//!
//! Orders have no update path: [`OrderUpdate`] has no variants, so an update request cannot
//! even be built.

use super::error::OrderError;
use crate::model::{NewOrder, Order, OrderId, OrderLine, OrderLineId};
use chrono::Utc;
use resource_actor::ActorEntity;

/// Uninhabited update type for orders.
#[derive(Debug, Clone)]
pub enum OrderUpdate {}

impl ActorEntity for Order {
    type Id = OrderId;
    type Create = NewOrder;
    type Update = OrderUpdate;
    type Action = ();
    type ActionResult = ();
    type Error = OrderError;

    fn id(&self) -> &OrderId {
        &self.id
    }

    /// Stamps the order and gives every line its own id. Prices are copied as given.
    fn from_create_params(id: OrderId, params: NewOrder) -> Result<Self, Self::Error> {
        let order_products = params
            .products
            .into_iter()
            .map(|line| OrderLine {
                id: OrderLineId::new(),
                product_id: line.product_id,
                quantity: line.quantity,
                price: line.price,
            })
            .collect();

        Ok(Self {
            id,
            customer: params.customer,
            order_products,
            created_at: Utc::now(),
        })
    }

    fn on_update(&mut self, update: OrderUpdate) -> Result<(), Self::Error> {
        match update {}
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), Self::Error> {
        Ok(())
    }
}
