//! Error types for courier dispatch.

use crate::model::ModelError;
use thiserror::Error;

/// Errors that can occur while assigning a courier to an order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DeliveryError {
    /// The courier pool is empty.
    #[error("No courier available")]
    NoCourierAvailable,

    /// The order cannot move to `InDelivery` (e.g. it is already dispatched).
    #[error("Order cannot be dispatched: {0}")]
    Order(#[from] ModelError),
}
