//! # Order Client
//!
//! Provides a high‑level API for the `Order` store and adapts it to the [`OrderStore`] port.
//! Validation and stock handling live in the
//! [`CreateOrderService`](crate::orders::CreateOrderService), not here.
use crate::model::{NewOrder, Order};
use crate::order_actor::OrderError;
use crate::ports::OrderStore;
use async_trait::async_trait;
use resource_actor::{ActorClient, ResourceClient, ResourceError};
use tracing::{debug, info, instrument};

/// Client for interacting with the Order store.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: ResourceError) -> Self::Error {
        OrderError::from(e)
    }
}

#[async_trait]
impl OrderStore for OrderClient {
    #[instrument(
        skip(self, order),
        fields(customer_id = %order.customer.id, lines = order.products.len())
    )]
    async fn create(&self, order: NewOrder) -> Result<Order, OrderError> {
        debug!(?order, "create called");
        let created = self.inner.create(order).await.map_err(Self::map_error)?;
        info!(order_id = %created.id, "Order stored");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Customer, OrderId};
    use chrono::Utc;
    use resource_actor::mock::MockClient;

    fn new_order() -> NewOrder {
        NewOrder {
            customer: Customer::new("C1", "Alice", "alice@example.com"),
            products: vec![],
        }
    }

    #[tokio::test]
    async fn test_create_returns_stored_order() {
        let stored = Order {
            id: OrderId(1),
            customer: Customer::new("C1", "Alice", "alice@example.com"),
            order_products: vec![],
            created_at: Utc::now(),
        };
        let mut mock = MockClient::<Order>::new();
        mock.expect_create().return_ok(stored.clone());

        let client = OrderClient::new(mock.client());
        let created = OrderStore::create(&client, new_order()).await.unwrap();

        assert_eq!(created, stored);
        mock.verify();
    }

    #[tokio::test]
    async fn test_create_maps_store_errors() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_create().return_err(ResourceError::ActorDropped);

        let client = OrderClient::new(mock.client());
        let result = OrderStore::create(&client, new_order()).await;

        assert!(matches!(result, Err(OrderError::ActorCommunicationError(_))));
    }
}
