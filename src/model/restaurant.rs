use crate::model::{Dish, Rating};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Restaurants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RestaurantId(pub u32);

impl From<u32> for RestaurantId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for RestaurantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "restaurant_{}", self.0)
    }
}

/// A restaurant and its menu.
///
/// # Resource Framework
/// This struct implements the [`Entity`](crate::framework::Entity) trait,
/// allowing it to be owned by a [`ResourceStore`](crate::framework::ResourceStore).
///
/// See [`impl Entity for Restaurant`](#impl-Entity-for-Restaurant) for details on:
/// - Creation parameters ([`RestaurantCreate`])
/// - Custom actions ([`RestaurantAction`](crate::restaurant_store::RestaurantAction))
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub address: String,
    pub cuisine: String,
    pub rating: Rating,
    menu: Vec<Dish>,
}

/// Payload for registering a new restaurant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantCreate {
    pub name: String,
    pub address: String,
    pub cuisine: String,
    pub rating: f64,
}

impl Restaurant {
    /// Creates a new Restaurant with an empty menu.
    pub fn new(
        id: RestaurantId,
        name: impl Into<String>,
        address: impl Into<String>,
        cuisine: impl Into<String>,
        rating: Rating,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            cuisine: cuisine.into(),
            rating,
            menu: Vec::new(),
        }
    }

    /// Appends a dish to the menu. No deduplication.
    pub fn add_dish(&mut self, dish: Dish) {
        self.menu.push(dish);
    }

    pub fn menu(&self) -> &[Dish] {
        &self.menu
    }

    pub fn dish(&self, index: usize) -> Option<&Dish> {
        self.menu.get(index)
    }
}

impl Display for Restaurant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}), Rating: {}, Address: {}",
            self.name, self.cuisine, self.rating, self.address
        )
    }
}
