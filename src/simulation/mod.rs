//! The demonstration scenario and its randomness seam.

pub mod harness;
pub mod picker;

pub use harness::*;
pub use picker::*;

use crate::lifecycle::SystemError;
use crate::model::ModelError;
use thiserror::Error;

/// Errors that stop a simulation run.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SimulationError {
    /// There is no client to place an order for.
    #[error("No clients registered")]
    NoClients,

    /// Sample or configured data breaks a model invariant (e.g. a courier rating of 7).
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    System(#[from] SystemError),
}
