use crate::clients::{CustomerClient, OrderClient, ProductClient};
use crate::config::SystemConfig;
use crate::orders::CreateOrderService;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The order service wired to the in-memory stores.
pub type InMemoryCreateOrderService =
    CreateOrderService<CustomerClient, ProductClient, OrderClient>;

/// Runs the three store actors and owns the clients for them.
///
/// # Example
///
/// ```rust
/// use order_recipe::config::SystemConfig;
/// use order_recipe::lifecycle::OrderSystem;
/// use order_recipe::model::{CustomerCreate, Product};
/// use order_recipe::orders::{CreateOrderRequest, OrderLineRequest};
/// use resource_actor::ActorClient;
/// use rust_decimal::Decimal;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = OrderSystem::new(&SystemConfig::default());
///
///     let customer = system
///         .customer_client
///         .create_customer(CustomerCreate {
///             name: "Alice".into(),
///             email: "alice@example.com".into(),
///         })
///         .await?;
///     system
///         .product_client
///         .insert(Product::new("P1", "Widget", Decimal::new(500, 2), 10))
///         .await?;
///
///     let order = system
///         .create_order
///         .execute(CreateOrderRequest {
///             customer_id: customer.id,
///             products: vec![OrderLineRequest { id: "P1".into(), quantity: 2 }],
///         })
///         .await?;
///     assert_eq!(order.total(), Decimal::new(1000, 2));
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct OrderSystem {
    pub customer_client: CustomerClient,
    pub product_client: ProductClient,
    pub order_client: OrderClient,
    /// Order placement over the three clients above.
    pub create_order: InMemoryCreateOrderService,
    handles: Vec<JoinHandle<()>>,
}

impl OrderSystem {
    /// Spawns one actor per store. Must be called from within a Tokio runtime.
    pub fn new(config: &SystemConfig) -> Self {
        let buffer = config.actors.channel_buffer;

        let (customer_actor, customer_client) = crate::customer_actor::new(buffer);
        let (product_actor, product_client) = crate::product_actor::new(buffer);
        let (order_actor, order_client) = crate::order_actor::new(buffer);

        let handles = vec![
            tokio::spawn(customer_actor.run()),
            tokio::spawn(product_actor.run()),
            tokio::spawn(order_actor.run()),
        ];

        let create_order = CreateOrderService::new(
            customer_client.clone(),
            product_client.clone(),
            order_client.clone(),
        );

        info!(channel_buffer = buffer, "Order system started");

        Self {
            customer_client,
            product_client,
            order_client,
            create_order,
            handles,
        }
    }

    /// Drops every client and waits for the actors to drain their queues and stop.
    ///
    /// Clones of the clients or of `create_order` held elsewhere keep their actor alive, so
    /// drop them before calling this.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.create_order);
        drop(self.customer_client);
        drop(self.product_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
