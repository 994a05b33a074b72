//! The create-order use case.
//!
//! [`CreateOrderService::execute`] validates a request against the customer directory and a
//! single catalog snapshot, persists the order with the snapshot prices and then writes the
//! decremented stock levels back in one batch.

use super::error::CreateOrderError;
use crate::model::{CustomerId, NewOrder, NewOrderLine, Order, Product, ProductId, ProductQuantity};
use crate::ports::{CustomerDirectory, OrderStore, ProductCatalog};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

/// One requested product line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineRequest {
    pub id: ProductId,
    pub quantity: u32,
}

/// Input of [`CreateOrderService::execute`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub customer_id: CustomerId,
    pub products: Vec<OrderLineRequest>,
}

/// Stock rule applied to every requested line.
///
/// A line is accepted only when the catalog holds strictly more than the requested
/// quantity, so ordering the last unit of a product is rejected.
pub fn has_available_stock(available: u32, requested: u32) -> bool {
    available > requested
}

/// Places orders on top of the three ports.
///
/// Holds no mutable state of its own; clones share the same adapters. Calls for the same
/// product are not serialized, so two concurrent orders may both decrement from the same
/// snapshot and one decrement is lost.
#[derive(Debug, Clone)]
pub struct CreateOrderService<C, P, O> {
    customers: C,
    products: P,
    orders: O,
}

impl<C, P, O> CreateOrderService<C, P, O>
where
    C: CustomerDirectory,
    P: ProductCatalog,
    O: OrderStore,
{
    pub fn new(customers: C, products: P, orders: O) -> Self {
        Self {
            customers,
            products,
            orders,
        }
    }

    /// Validates and persists a new order, then updates the stock of every ordered product.
    ///
    /// Validation runs in this order and stops at the first failure:
    /// 1. the customer must exist,
    /// 2. the catalog lookup must produce a result,
    /// 3. every requested product must be in that result,
    /// 4. every line must pass [`has_available_stock`].
    ///
    /// Nothing is written when validation fails. If the stock update fails after the order
    /// was stored, the error is returned and the order stays persisted.
    #[instrument(
        name = "create_order",
        skip(self, request),
        fields(customer_id = %request.customer_id, lines = request.products.len())
    )]
    pub async fn execute(&self, request: CreateOrderRequest) -> Result<Order, CreateOrderError> {
        debug!(?request, "execute called");

        let Some(customer) = self.customers.find_by_id(&request.customer_id).await? else {
            warn!("Rejected: customer does not exist");
            return Err(CreateOrderError::CustomerNotFound(request.customer_id));
        };

        let ids: Vec<ProductId> = request.products.iter().map(|line| line.id.clone()).collect();
        let Some(catalog) = self.products.find_all_by_id(&ids).await? else {
            warn!("Rejected: catalog returned no products");
            return Err(CreateOrderError::NoProductsFound);
        };
        let snapshot: HashMap<&ProductId, &Product> =
            catalog.iter().map(|product| (&product.id, product)).collect();

        if let Some(missing) = request
            .products
            .iter()
            .find(|line| !snapshot.contains_key(&line.id))
        {
            warn!(product_id = %missing.id, "Rejected: unknown product");
            return Err(CreateOrderError::ProductNotFound(missing.id.clone()));
        }

        let mut lines = Vec::with_capacity(request.products.len());
        for line in &request.products {
            let product = snapshot[&line.id];
            if !has_available_stock(product.quantity, line.quantity) {
                warn!(
                    product_id = %line.id,
                    available = product.quantity,
                    requested = line.quantity,
                    "Rejected: insufficient stock"
                );
                return Err(CreateOrderError::InsufficientStock {
                    product_id: line.id.clone(),
                    requested: line.quantity,
                });
            }
            lines.push(NewOrderLine {
                product_id: line.id.clone(),
                quantity: line.quantity,
                price: product.price,
            });
        }

        let order = self
            .orders
            .create(NewOrder {
                customer,
                products: lines,
            })
            .await?;

        let mut quantities = Vec::with_capacity(order.order_products.len());
        for line in &order.order_products {
            let Some(product) = snapshot.get(&line.product_id) else {
                return Err(CreateOrderError::ProductNotFound(line.product_id.clone()));
            };
            quantities.push(ProductQuantity {
                id: line.product_id.clone(),
                quantity: product.quantity.saturating_sub(line.quantity),
            });
        }
        debug!(?quantities, "Updating stock levels");
        if let Err(e) = self.products.update_quantity(quantities).await {
            warn!(
                order_id = %order.id,
                error = %e,
                "Stock update failed after the order was stored"
            );
            return Err(e.into());
        }

        info!(order_id = %order.id, total = %order.total(), "Order created");
        Ok(order)
    }
}
