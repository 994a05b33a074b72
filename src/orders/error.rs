//! Error type for the order creation use case.

use crate::customer_actor::CustomerError;
use crate::model::{CustomerId, ProductId};
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use thiserror::Error;

/// Why an order could not be created.
///
/// The first four variants are validation failures and are reported before anything is
/// persisted. The remaining variants carry a failure of one of the ports unchanged.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CreateOrderError {
    #[error("customer does not exist: {0}")]
    CustomerNotFound(CustomerId),

    #[error("no products found")]
    NoProductsFound,

    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    #[error("insufficient stock for product {product_id}: requested {requested}")]
    InsufficientStock { product_id: ProductId, requested: u32 },

    #[error(transparent)]
    Customer(#[from] CustomerError),

    #[error(transparent)]
    Product(#[from] ProductError),

    #[error(transparent)]
    Order(#[from] OrderError),
}

impl CreateOrderError {
    /// `true` for the failures a caller should see as a rejected request rather than a
    /// fault in a downstream store.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::CustomerNotFound(_)
                | Self::NoProductsFound
                | Self::ProductNotFound(_)
                | Self::InsufficientStock { .. }
        )
    }
}
