//! Generic resource framework.
//!
//! This module provides the building blocks for owning registered entities
//! with create/read operations and custom actions.
//!
//! # Main Components
//!
//! - [`Entity`] - Trait that resource types implement to be managed by a store
//! - [`ResourceStore`] - Generic owner of entities, keyed by typed id
//! - [`FrameworkError`] - Common error types

pub mod core;

// Re-export core types for convenience
pub use core::*;
