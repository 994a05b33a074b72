//! # Product Client
//!
//! Provides a high‑level API for interacting with the `Product` store.
//! It wraps a `ResourceClient<Product>`, exposes domain‑specific methods and adapts the store
//! to the [`ProductCatalog`] port.
use crate::model::{Product, ProductCreate, ProductId, ProductQuantity, ProductUpdate};
use crate::ports::ProductCatalog;
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use async_trait::async_trait;
use resource_actor::{ActorClient, ResourceClient, ResourceError};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Client for interacting with the Product store.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: ResourceError) -> Self::Error {
        ProductError::from(e)
    }
}

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Check the current stock level for a product.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, ProductError> {
        debug!("Checking stock for product {}", id);
        match self
            .inner
            .perform_action(id, ProductAction::CheckStock)
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::CheckStock(level) => Ok(level),
        }
    }

    /// Change the catalog price. Orders already placed keep the price they captured.
    #[instrument(skip(self))]
    pub async fn update_price(
        &self,
        id: ProductId,
        price: Decimal,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        let update = ProductUpdate {
            price: Some(price),
            ..Default::default()
        };
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ProductCatalog for ProductClient {
    #[instrument(skip(self), fields(count = ids.len()))]
    async fn find_all_by_id(
        &self,
        ids: &[ProductId],
    ) -> Result<Option<Vec<Product>>, ProductError> {
        debug!(?ids, "Sending request");
        let products = self
            .inner
            .get_many(ids.to_vec())
            .await
            .map_err(Self::map_error)?;
        Ok(Some(products))
    }

    #[instrument(skip(self), fields(count = quantities.len()))]
    async fn update_quantity(&self, quantities: Vec<ProductQuantity>) -> Result<(), ProductError> {
        debug!(?quantities, "Sending request");
        let updates = quantities
            .into_iter()
            .map(|q| {
                let update = ProductUpdate {
                    quantity: Some(q.quantity),
                    ..Default::default()
                };
                (q.id, update)
            })
            .collect();
        self.inner
            .update_many(updates)
            .await
            .map(|_| ())
            .map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_actor::mock::{
        create_mock_client, expect_action, expect_get_many, expect_update_many,
    };

    fn widget(quantity: u32) -> Product {
        Product::new("P1", "Widget", Decimal::new(500, 2), quantity)
    }

    #[tokio::test]
    async fn test_check_stock_returns_correct_level() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let check_task = tokio::spawn(async move { product_client.check_stock("P1".into()).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");

        assert_eq!(id, ProductId::from("P1"));
        assert!(matches!(action, ProductAction::CheckStock));

        responder
            .send(Ok(ProductActionResult::CheckStock(42)))
            .unwrap();

        let result = check_task.await.unwrap();
        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_find_all_by_id_forwards_ids_in_order() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let task = tokio::spawn(async move {
            product_client
                .find_all_by_id(&[ProductId::from("P2"), ProductId::from("P1")])
                .await
        });

        let (ids, responder) = expect_get_many(&mut receiver)
            .await
            .expect("Expected GetMany request");
        assert_eq!(ids, vec![ProductId::from("P2"), ProductId::from("P1")]);
        responder.send(Ok(vec![widget(10)])).unwrap();

        let found = task.await.unwrap().unwrap();
        assert_eq!(found, Some(vec![widget(10)]));
    }

    #[tokio::test]
    async fn test_update_quantity_sends_one_batch_of_absolute_levels() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let task = tokio::spawn(async move {
            product_client
                .update_quantity(vec![
                    ProductQuantity {
                        id: "P1".into(),
                        quantity: 8,
                    },
                    ProductQuantity {
                        id: "P2".into(),
                        quantity: 0,
                    },
                ])
                .await
        });

        let (updates, responder) = expect_update_many(&mut receiver)
            .await
            .expect("Expected UpdateMany request");
        let sent: Vec<(ProductId, Option<u32>, Option<Decimal>)> = updates
            .into_iter()
            .map(|(id, u)| (id, u.quantity, u.price))
            .collect();
        let expected: Vec<(ProductId, Option<u32>, Option<Decimal>)> = vec![
            (ProductId::from("P1"), Some(8), None),
            (ProductId::from("P2"), Some(0), None),
        ];
        assert_eq!(sent, expected);
        responder.send(Ok(vec![widget(8)])).unwrap();

        assert!(task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_update_quantity_maps_unknown_product() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let task = tokio::spawn(async move {
            product_client
                .update_quantity(vec![ProductQuantity {
                    id: "P404".into(),
                    quantity: 1,
                }])
                .await
        });

        let (_, responder) = expect_update_many(&mut receiver)
            .await
            .expect("Expected UpdateMany request");
        responder
            .send(Err(ResourceError::NotFound("P404".to_string())))
            .unwrap();

        assert_eq!(
            task.await.unwrap(),
            Err(ProductError::NotFound("P404".to_string()))
        );
    }
}
