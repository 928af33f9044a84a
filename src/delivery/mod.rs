//! Courier pool and courier-to-order assignment.

pub mod error;
pub mod manager;

pub use error::*;
pub use manager::*;
