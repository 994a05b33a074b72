//! # Order Creation
//!
//! The orchestrator that turns a [`CreateOrderRequest`] into a persisted
//! [`Order`](crate::model::Order). It is generic over the [`ports`](crate::ports), so the
//! same code runs against the in-memory store clients and against scripted test doubles.

pub mod create_order;
pub mod error;

pub use create_order::*;
pub use error::*;
