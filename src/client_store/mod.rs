//! Client registry: the client entity implementation and its store factory.

mod actions;
pub mod entity;

pub use actions::*;

use crate::framework::ResourceStore;
use crate::model::{Client, ClientId};

/// Creates a new, empty client store handing out `client_1`, `client_2`, ...
pub fn new() -> ResourceStore<Client> {
    let mut next = 0u32;
    ResourceStore::new(move || {
        next += 1;
        ClientId(next)
    })
}
