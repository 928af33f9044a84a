//! Entity trait implementation for the Restaurant domain type.
//!
//! Creation validates the rating; see [`Rating`].

use super::actions::{RestaurantAction, RestaurantActionResult};
use crate::framework::Entity;
use crate::model::{Rating, Restaurant, RestaurantCreate, RestaurantId};

impl Entity for Restaurant {
    type Id = RestaurantId;
    type CreateParams = RestaurantCreate;
    type Action = RestaurantAction;
    type ActionResult = RestaurantActionResult;

    /// Creates a new Restaurant from creation parameters.
    fn from_create_params(id: RestaurantId, params: RestaurantCreate) -> Result<Self, String> {
        let rating = Rating::new(params.rating).map_err(|e| e.to_string())?;
        Ok(Self::new(id, params.name, params.address, params.cuisine, rating))
    }

    fn handle_action(&mut self, action: RestaurantAction) -> Result<RestaurantActionResult, String> {
        match action {
            RestaurantAction::AddDish(dish) => {
                self.add_dish(dish);
                Ok(RestaurantActionResult::AddDish(self.menu().len() - 1))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::framework::FrameworkError;
    use crate::model::{Dish, RestaurantCreate};
    use crate::restaurant_store::{self, RestaurantAction, RestaurantActionResult};

    fn params(rating: f64) -> RestaurantCreate {
        RestaurantCreate {
            name: "Best Sushi".into(),
            address: "Pyrihiva 9".into(),
            cuisine: "Ukraine".into(),
            rating,
        }
    }

    #[test]
    fn test_add_dish_returns_menu_index() {
        let mut store = restaurant_store::new();
        let id = store.create(params(4.5)).unwrap();

        let roll = Dish::new("Sushi Roll", "", 120.0, 200.0, 250, ["Fish", "Rice"]).unwrap();
        let golybtsi = Dish::new("Golybtsi", "", 150.0, 300.0, 350, ["Cabbage", "Meat"]).unwrap();

        assert_eq!(
            store.perform_action(&id, RestaurantAction::AddDish(roll)),
            Ok(RestaurantActionResult::AddDish(0))
        );
        assert_eq!(
            store.perform_action(&id, RestaurantAction::AddDish(golybtsi)),
            Ok(RestaurantActionResult::AddDish(1))
        );
        assert_eq!(store.get(&id).unwrap().menu().len(), 2);
    }

    #[test]
    fn test_rating_out_of_range_is_rejected() {
        let mut store = restaurant_store::new();
        let err = store.create(params(6.0)).unwrap_err();
        assert_eq!(
            err,
            FrameworkError::Custom("Rating must be within [0, 5], got 6".into())
        );
    }
}
