//! # Ports
//!
//! The three capabilities the order orchestrator consumes. Concrete adapters are chosen at
//! start-up and passed to [`CreateOrderService::new`](crate::orders::CreateOrderService::new);
//! the shipped ones are the store clients in [`clients`](crate::clients).

use crate::customer_actor::CustomerError;
use crate::model::{Customer, CustomerId, NewOrder, Order, Product, ProductId, ProductQuantity};
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use async_trait::async_trait;

/// Resolves customer ids.
#[async_trait]
pub trait CustomerDirectory: Send + Sync {
    /// `Ok(None)` when no customer has this id.
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, CustomerError>;
}

/// Product prices and stock levels.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Looks up every product in `ids`.
    ///
    /// Unknown ids are simply missing from the returned list. `Ok(None)` means the lookup
    /// produced no result at all, which is distinct from an empty list.
    async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Option<Vec<Product>>, ProductError>;

    /// Sets the absolute stock level of every listed product in one call.
    async fn update_quantity(&self, quantities: Vec<ProductQuantity>) -> Result<(), ProductError>;
}

/// Persists orders.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Stores a new order and returns it with its generated order and line ids.
    async fn create(&self, order: NewOrder) -> Result<Order, OrderError>;
}
