//! Orchestration and observability.
//!
//! # Main Components
//!
//! - [`DeliverySystem`] - Owns the stores and the courier pool, places and dispatches orders
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod delivery_system;
pub mod error;
pub mod tracing;

pub use delivery_system::*;
pub use error::*;
pub use self::tracing::*;
