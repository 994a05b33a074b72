//! # Order Recipe
//!
//! Order placement on top of resource-oriented actors.
//!
//! The use case itself, [`CreateOrderService`](orders::CreateOrderService), only knows three
//! narrow [`ports`]: a customer directory, a product catalog and an order store. The crate
//! ships one adapter for each, backed by an in-memory store actor from the
//! [`resource_actor`] crate, and an [`OrderSystem`](lifecycle::OrderSystem) that wires them
//! together.
//!
//! ## Architecture Notes
//!
//! ### 1. One actor per store
//! Each store is a `ResourceActor<T>` running in its own Tokio task. Requests are processed
//! one at a time, so a single request (a batch stock update included) is atomic for that
//! store. Nothing spans more than one request.
//!
//! ### 2. The orchestrator lives outside the actors
//! Validation, price capture and the stock decrement run in
//! [`CreateOrderService::execute`](orders::CreateOrderService::execute), which awaits each
//! port in turn. Two orders for the same product placed at the same time can both read the
//! same stock level, and the later write wins.
//!
//! ### 3. Type-safe errors
//! Each store has its own error enum ([`CustomerError`](customer_actor::CustomerError),
//! [`ProductError`](product_actor::ProductError), [`OrderError`](order_actor::OrderError)).
//! [`CreateOrderError`](orders::CreateOrderError) adds the validation failures and wraps the
//! store errors transparently; [`is_validation`](orders::CreateOrderError::is_validation)
//! tells the two apart.
//!
//! ## Module Tour
//!
//! - [`model`]: data types ([`Customer`](model::Customer), [`Product`](model::Product),
//!   [`Order`](model::Order)) and their store payloads.
//! - [`customer_actor`], [`product_actor`], [`order_actor`]: `ActorEntity` implementations
//!   and factories for each store.
//! - [`clients`]: domain clients over `ResourceClient<T>`, each implementing its port.
//! - [`ports`]: the traits the orchestrator depends on.
//! - [`orders`]: the create-order use case and its error type.
//! - [`config`]: TOML configuration.
//! - [`lifecycle`]: start-up, shutdown and tracing setup.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ORDER_RECIPE_CONFIG=order-recipe.toml cargo run
//! ```

pub mod clients;
pub mod config;
pub mod customer_actor;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod orders;
pub mod ports;
pub mod product_actor;
