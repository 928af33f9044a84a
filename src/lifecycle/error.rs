//! Error types for the delivery system orchestrator.

use crate::delivery::DeliveryError;
use crate::framework::FrameworkError;
use crate::model::{ClientId, ModelError, OrderId, RestaurantId};
use thiserror::Error;

/// Errors that can occur while placing or dispatching orders.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SystemError {
    #[error("Client not found: {0}")]
    ClientNotFound(ClientId),

    #[error("Restaurant not found: {0}")]
    RestaurantNotFound(RestaurantId),

    #[error("Order {order} not found for {client}")]
    OrderNotFound { client: ClientId, order: OrderId },

    /// A dish index outside the restaurant's menu.
    #[error("Dish #{index} not on the menu of {restaurant}")]
    DishNotFound { restaurant: RestaurantId, index: usize },

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    #[error("Store error: {0}")]
    Store(#[from] FrameworkError),
}
