//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber for the binary.
//!
//! Module paths are hidden (`with_target(false)`); the store actors tag every event with an
//! `entity_type` field instead, and the clients and the order service open spans with
//! `#[instrument]`, so the span path shows which workflow an event belongs to.
//!
//! The filter comes from `RUST_LOG` when it is set and falls back to
//! [`LoggingConfig::filter`] otherwise:
//!
//! ```bash
//! # Outcomes only
//! RUST_LOG=info cargo run
//!
//! # Full payloads at every entry point
//! RUST_LOG=debug cargo run
//!
//! # Store internals only
//! RUST_LOG=resource_actor=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a successful order reads roughly like:
//!
//! ```text
//! INFO Created customer_id="customer_1" entity_type="Customer" size=1
//! INFO Inserted product_id="P1" entity_type="Product" size=1
//! INFO create_order{customer_id=customer_1 lines=1}:create{...}: Order stored order_id=order_1
//! INFO create_order{customer_id=customer_1 lines=1}: Order created order_id=order_1 total=10.00
//! ```
//!
//! [`LogFormat::Json`] switches to one JSON object per event for log shippers.

use crate::config::{LogFormat, LoggingConfig};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Calling it a second time leaves the first one in place
/// and reports that at debug level.
pub fn setup_tracing(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = match config.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    if let Err(e) = installed {
        debug!(error = %e, "Global subscriber already installed, keeping it");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_setup_keeps_the_first_subscriber() {
        setup_tracing(&LoggingConfig::default());
        setup_tracing(&LoggingConfig {
            filter: "debug".to_string(),
            format: LogFormat::Json,
        });
        assert!(tracing::dispatcher::has_been_set());
    }
}
