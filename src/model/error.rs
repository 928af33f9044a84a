//! Validation errors for the domain model.

use crate::model::OrderStatus;
use thiserror::Error;

/// Errors raised when a model value would break one of its invariants.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    /// A dish price below zero, infinite or NaN.
    #[error("Price must be a finite non-negative number, got {0}")]
    InvalidPrice(f64),

    /// A dish weight below zero, infinite or NaN.
    #[error("Weight must be a finite non-negative number, got {0}")]
    InvalidWeight(f64),

    /// A rating outside `[0, 5]` (or NaN).
    #[error("Rating must be within [0, 5], got {0}")]
    RatingOutOfRange(f64),

    /// An order placed without any dish.
    #[error("Order must contain at least one dish")]
    EmptyOrder,

    /// A status change that is not the single forward step.
    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },
}
