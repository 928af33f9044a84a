//! Restaurant registry: the restaurant entity implementation and its store factory.

mod actions;
pub mod entity;

pub use actions::*;

use crate::framework::ResourceStore;
use crate::model::{Restaurant, RestaurantId};

/// Creates a new, empty restaurant store handing out `restaurant_1`, `restaurant_2`, ...
pub fn new() -> ResourceStore<Restaurant> {
    let mut next = 0u32;
    ResourceStore::new(move || {
        next += 1;
        RestaurantId(next)
    })
}
