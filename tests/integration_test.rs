use async_trait::async_trait;
use order_recipe::clients::ProductClient;
use order_recipe::config::SystemConfig;
use order_recipe::lifecycle::OrderSystem;
use order_recipe::model::{
    Customer, CustomerCreate, CustomerId, Product, ProductId, ProductQuantity,
};
use order_recipe::orders::{
    CreateOrderError, CreateOrderRequest, CreateOrderService, OrderLineRequest,
};
use order_recipe::ports::ProductCatalog;
use order_recipe::product_actor::ProductError;
use resource_actor::ActorClient;
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::Barrier;

async fn seeded_system() -> (OrderSystem, CustomerId) {
    let system = OrderSystem::new(&SystemConfig::default());

    let customer = system
        .customer_client
        .create_customer(CustomerCreate {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        })
        .await
        .expect("Failed to create customer");

    system
        .product_client
        .insert(Product::new("P1", "Widget", Decimal::new(500, 2), 10))
        .await
        .expect("Failed to insert product");

    (system, customer.id)
}

fn order_of(customer_id: &CustomerId, lines: &[(&str, u32)]) -> CreateOrderRequest {
    CreateOrderRequest {
        customer_id: customer_id.clone(),
        products: lines
            .iter()
            .map(|(id, quantity)| OrderLineRequest {
                id: (*id).into(),
                quantity: *quantity,
            })
            .collect(),
    }
}

/// Full end-to-end test with all real actors.
#[tokio::test]
async fn test_full_order_system_integration() {
    let (system, customer_id) = seeded_system().await;

    let order = system
        .create_order
        .execute(order_of(&customer_id, &[("P1", 2)]))
        .await
        .expect("Failed to create order");

    assert_eq!(order.customer.id, customer_id);
    assert_eq!(order.order_products.len(), 1);
    assert_eq!(order.order_products[0].price, Decimal::new(500, 2));
    assert_eq!(order.total(), Decimal::new(1000, 2));

    let stock = system.product_client.check_stock("P1".into()).await.unwrap();
    assert_eq!(stock, 8);

    let stored = system
        .order_client
        .get(order.id)
        .await
        .unwrap()
        .expect("Order not found");
    assert_eq!(stored, order);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_identical_requests_create_two_orders() {
    let (system, customer_id) = seeded_system().await;

    let first = system
        .create_order
        .execute(order_of(&customer_id, &[("P1", 2)]))
        .await
        .unwrap();
    let second = system
        .create_order
        .execute(order_of(&customer_id, &[("P1", 2)]))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_ne!(first.order_products[0].id, second.order_products[0].id);
    assert_eq!(system.product_client.check_stock("P1".into()).await.unwrap(), 6);
    assert_eq!(system.order_client.list().await.unwrap().len(), 2);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_price_change_does_not_touch_placed_orders() {
    let (system, customer_id) = seeded_system().await;

    let before = system
        .create_order
        .execute(order_of(&customer_id, &[("P1", 1)]))
        .await
        .unwrap();

    system
        .product_client
        .update_price("P1".into(), Decimal::new(700, 2))
        .await
        .unwrap();

    let stored = system.order_client.get(before.id).await.unwrap().unwrap();
    assert_eq!(stored.order_products[0].price, Decimal::new(500, 2));

    let after = system
        .create_order
        .execute(order_of(&customer_id, &[("P1", 1)]))
        .await
        .unwrap();
    assert_eq!(after.order_products[0].price, Decimal::new(700, 2));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_rejected_orders_leave_stock_untouched() {
    let (system, customer_id) = seeded_system().await;

    let err = system
        .create_order
        .execute(order_of(&customer_id, &[("P1", 10)]))
        .await
        .unwrap_err();
    assert!(matches!(err, CreateOrderError::InsufficientStock { requested: 10, .. }));

    let err = system
        .create_order
        .execute(order_of(&customer_id, &[("P1", 1), ("P2", 1)]))
        .await
        .unwrap_err();
    assert_eq!(err, CreateOrderError::ProductNotFound("P2".into()));

    let err = system
        .create_order
        .execute(order_of(&"customer_99".into(), &[("P1", 1)]))
        .await
        .unwrap_err();
    assert_eq!(err, CreateOrderError::CustomerNotFound("customer_99".into()));

    assert_eq!(system.product_client.check_stock("P1".into()).await.unwrap(), 10);
    assert!(system.order_client.list().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_order_without_lines_is_accepted() {
    let (system, customer_id) = seeded_system().await;

    let order = system
        .create_order
        .execute(order_of(&customer_id, &[]))
        .await
        .unwrap();

    assert!(order.order_products.is_empty());
    assert_eq!(order.total(), Decimal::ZERO);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_repeated_product_lines_are_kept_separate() {
    let (system, customer_id) = seeded_system().await;

    let order = system
        .create_order
        .execute(order_of(&customer_id, &[("P1", 3), ("P1", 4)]))
        .await
        .unwrap();

    let quantities: Vec<u32> = order.order_products.iter().map(|l| l.quantity).collect();
    assert_eq!(quantities, vec![3, 4]);
    assert_eq!(order.total(), Decimal::new(3500, 2));

    // Each line writes 10 minus its own quantity; the last write wins.
    assert_eq!(system.product_client.check_stock("P1".into()).await.unwrap(), 6);

    system.shutdown().await.unwrap();
}

/// Holds every lookup until two of them have read the catalog.
struct GatedCatalog {
    inner: ProductClient,
    gate: Arc<Barrier>,
}

#[async_trait]
impl ProductCatalog for GatedCatalog {
    async fn find_all_by_id(
        &self,
        ids: &[ProductId],
    ) -> Result<Option<Vec<Product>>, ProductError> {
        let found = self.inner.find_all_by_id(ids).await;
        self.gate.wait().await;
        found
    }

    async fn update_quantity(&self, quantities: Vec<ProductQuantity>) -> Result<(), ProductError> {
        self.inner.update_quantity(quantities).await
    }
}

#[tokio::test]
async fn test_concurrent_orders_lose_one_decrement() {
    let (system, customer_id) = seeded_system().await;

    let racing = CreateOrderService::new(
        system.customer_client.clone(),
        GatedCatalog {
            inner: system.product_client.clone(),
            gate: Arc::new(Barrier::new(2)),
        },
        system.order_client.clone(),
    );

    let (first, second) = tokio::join!(
        racing.execute(order_of(&customer_id, &[("P1", 1)])),
        racing.execute(order_of(&customer_id, &[("P1", 1)])),
    );
    assert!(first.is_ok());
    assert!(second.is_ok());

    // Both orders were stored, but both wrote 10 - 1.
    assert_eq!(system.order_client.list().await.unwrap().len(), 2);
    assert_eq!(system.product_client.check_stock("P1".into()).await.unwrap(), 9);

    drop(racing);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_customer_directory_round_trip() {
    let (system, customer_id) = seeded_system().await;

    let customer: Customer = system
        .customer_client
        .get(customer_id.clone())
        .await
        .unwrap()
        .expect("Customer not found");
    assert_eq!(customer.name, "Alice");
    assert_eq!(customer_id.to_string(), "customer_1");

    system.shutdown().await.unwrap();
}
