//! [`ActorEntity`] implementation for the [`Product`] model.
//!
//! Includes the `CheckStock` action. Stock levels are set through
//! [`ProductUpdate::quantity`], which is what the catalog's batch quantity update sends.

use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use resource_actor::ActorEntity;
use rust_decimal::Decimal;

fn check_price(price: Decimal) -> Result<Decimal, ProductError> {
    if price < Decimal::ZERO {
        return Err(ProductError::InvalidPrice(price));
    }
    Ok(price)
}

impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Error = ProductError;

    fn id(&self) -> &ProductId {
        &self.id
    }

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        let price = check_price(params.price)?;
        Ok(Self::new(id, params.name, price, params.quantity))
    }

    /// Handles updates to the Product entity.
    ///
    /// # Fields Updated
    /// - `price`: Product price (must not be negative)
    /// - `quantity`: Available stock quantity (absolute value, not a delta)
    fn on_update(&mut self, update: ProductUpdate) -> Result<(), Self::Error> {
        if let Some(price) = update.price {
            self.price = check_price(price)?;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        Ok(())
    }

    fn handle_action(&mut self, action: ProductAction) -> Result<ProductActionResult, Self::Error> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.quantity)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> Product {
        Product::new("P1", "Widget", Decimal::new(500, 2), 10)
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let result = Product::from_create_params(
            ProductId::from(1),
            ProductCreate {
                name: "Broken".to_string(),
                price: Decimal::new(-1, 0),
                quantity: 1,
            },
        );
        assert_eq!(result, Err(ProductError::InvalidPrice(Decimal::new(-1, 0))));
    }

    #[test]
    fn test_update_leaves_unset_fields_alone() {
        let mut product = widget();
        product
            .on_update(ProductUpdate {
                quantity: Some(3),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(product.quantity, 3);
        assert_eq!(product.price, Decimal::new(500, 2));
    }

    #[test]
    fn test_failed_price_update_keeps_quantity_untouched() {
        let mut product = widget();
        let result = product.on_update(ProductUpdate {
            price: Some(Decimal::new(-5, 0)),
            quantity: Some(0),
        });
        assert!(result.is_err());
        assert_eq!(product.quantity, 10);
    }

    #[test]
    fn test_check_stock_reports_quantity() {
        let mut product = widget();
        let result = product.handle_action(ProductAction::CheckStock).unwrap();
        assert_eq!(result, ProductActionResult::CheckStock(10));
    }
}
