//! Demo binary: starts the in-memory stores, places one accepted and one rejected order and
//! shuts down.
//!
//! Set `ORDER_RECIPE_CONFIG` to a TOML file to override the defaults, and `RUST_LOG` to
//! override the configured log filter.

use order_recipe::config::SystemConfig;
use order_recipe::lifecycle::{setup_tracing, OrderSystem};
use order_recipe::model::{CustomerCreate, ProductCreate};
use order_recipe::orders::{CreateOrderRequest, OrderLineRequest};
use rust_decimal::Decimal;
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = SystemConfig::from_env().map_err(|e| e.to_string())?;
    setup_tracing(&config.logging);

    info!("Starting application with complete order system");

    let system = OrderSystem::new(&config);

    let span = tracing::info_span!("customer_creation");
    let customer = async {
        info!("Creating test customer");
        system
            .customer_client
            .create_customer(CustomerCreate {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
            })
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(customer_id = %customer.id, "Customer created successfully");

    let product = system
        .product_client
        .create_product(ProductCreate {
            name: "Test Product".to_string(),
            price: Decimal::new(2500, 2),
            quantity: 10,
        })
        .await
        .map_err(|e| e.to_string())?;

    info!(product_id = %product.id, "Product created successfully");

    let span = tracing::info_span!("order_processing");
    let order_result = async {
        info!("Placing order");
        system
            .create_order
            .execute(CreateOrderRequest {
                customer_id: customer.id.clone(),
                products: vec![OrderLineRequest {
                    id: product.id.clone(),
                    quantity: 3,
                }],
            })
            .await
    }
    .instrument(span)
    .await;

    match order_result {
        Ok(order) => info!(
            order_id = %order.id,
            total = %order.total(),
            "Order processed successfully"
        ),
        Err(e) => error!(error = %e, "Order processing failed"),
    }

    // Only 7 units are left now, so asking for all of them is rejected.
    let rejected = system
        .create_order
        .execute(CreateOrderRequest {
            customer_id: customer.id.clone(),
            products: vec![OrderLineRequest {
                id: product.id.clone(),
                quantity: 7,
            }],
        })
        .await;
    match rejected {
        Err(e) if e.is_validation() => warn!(error = %e, "Order rejected"),
        Err(e) => error!(error = %e, "Order processing failed"),
        Ok(order) => info!(order_id = %order.id, "Order processed successfully"),
    }

    let stock = system
        .product_client
        .check_stock(product.id.clone())
        .await
        .map_err(|e| e.to_string())?;
    info!(product_id = %product.id, stock, "Remaining stock");

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
