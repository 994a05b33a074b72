//! Custom actions for the Product store.
//!
//! Operations on a [`Product`](crate::model::Product) that are neither create nor update.
//! They are handled by
//! [`ActorEntity::handle_action`](resource_actor::ActorEntity::handle_action).

/// Custom actions for Product entities.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    /// Result from CheckStock action - returns the current stock level
    CheckStock(u32),
}
