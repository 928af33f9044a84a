//! Pure data structures (DTOs) for the delivery domain.
//!
//! [`Client`] and [`Restaurant`] implement the [`Entity`](crate::framework::Entity)
//! trait; the rest are plain values.

pub mod client;
pub mod courier;
pub mod dish;
pub mod error;
pub mod order;
pub mod rating;
pub mod restaurant;

pub use client::*;
pub use courier::*;
pub use dish::*;
pub use error::*;
pub use order::*;
pub use rating::*;
pub use restaurant::*;
