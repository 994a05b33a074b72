//! Start-up and shutdown of the in-memory order system, plus the log subscriber.

pub mod order_system;
pub mod tracing;

pub use order_system::*;
pub use self::tracing::setup_tracing;
