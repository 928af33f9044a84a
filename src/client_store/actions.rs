//! Custom actions for the client store.
//!
//! These are handled by [`Entity::handle_action`](crate::framework::Entity::handle_action)
//! on [`Client`](crate::model::Client).

use crate::model::Order;

/// Custom actions for Client entities.
#[derive(Debug, Clone)]
pub enum ClientAction {
    /// Appends an order to the client's history.
    AddOrder(Order),
}

/// Results from ClientActions - variants match 1:1 with ClientAction
#[derive(Debug, Clone, PartialEq)]
pub enum ClientActionResult {
    /// History length after the append
    AddOrder(usize),
}
