//! Custom actions for the restaurant store.

use crate::model::Dish;

/// Custom actions for Restaurant entities.
#[derive(Debug, Clone)]
pub enum RestaurantAction {
    /// Appends a dish to the menu.
    AddDish(Dish),
}

/// Results from RestaurantActions - variants match 1:1 with RestaurantAction
#[derive(Debug, Clone, PartialEq)]
pub enum RestaurantActionResult {
    /// Index of the new dish in the menu
    AddDish(usize),
}
