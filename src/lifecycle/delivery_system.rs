use super::SystemError;
use crate::client_store::{self, ClientAction};
use crate::delivery::DeliveryManager;
use crate::framework::ResourceStore;
use crate::model::{
    Client, ClientCreate, ClientId, Courier, Dish, Order, OrderId, Restaurant, RestaurantCreate,
    RestaurantId,
};
use crate::restaurant_store::{self, RestaurantAction, RestaurantActionResult};
use tracing::{debug, info, instrument};

/// The orchestrator for the delivery workflow.
///
/// `DeliverySystem` is responsible for:
/// - **Ownership**: the client store, the restaurant store and the courier pool
/// - **Order placement**: snapshotting dishes into an [`Order`] and filing it in
///   the client's history
/// - **Dispatch**: handing a placed order to the [`DeliveryManager`]
///
/// # Example
///
/// ```ignore
/// let mut system = DeliverySystem::new();
/// let client = system.register_client(client_data)?;
/// let restaurant = system.register_restaurant(restaurant_data)?;
/// system.add_dish(restaurant, dish)?;
/// system.add_courier(courier);
///
/// let order = system.place_order(client, restaurant, &[0])?;
/// let courier = system.dispatch(client, order)?;
/// ```
pub struct DeliverySystem {
    clients: ResourceStore<Client>,
    restaurants: ResourceStore<Restaurant>,
    delivery_manager: DeliveryManager,
    next_order_id: u32,
}

impl Default for DeliverySystem {
    fn default() -> Self {
        Self::new()
    }
}

impl DeliverySystem {
    pub fn new() -> Self {
        Self::with_manager(DeliveryManager::new())
    }

    /// Creates a system around an existing courier pool.
    pub fn with_manager(delivery_manager: DeliveryManager) -> Self {
        Self {
            clients: client_store::new(),
            restaurants: restaurant_store::new(),
            delivery_manager,
            next_order_id: 1,
        }
    }

    pub fn clients(&self) -> &ResourceStore<Client> {
        &self.clients
    }

    pub fn restaurants(&self) -> &ResourceStore<Restaurant> {
        &self.restaurants
    }

    pub fn delivery_manager(&self) -> &DeliveryManager {
        &self.delivery_manager
    }

    pub fn register_client(&mut self, params: ClientCreate) -> Result<ClientId, SystemError> {
        Ok(self.clients.create(params)?)
    }

    pub fn register_restaurant(&mut self, params: RestaurantCreate) -> Result<RestaurantId, SystemError> {
        Ok(self.restaurants.create(params)?)
    }

    /// Appends a dish to a restaurant menu and returns its menu index.
    pub fn add_dish(&mut self, restaurant_id: RestaurantId, dish: Dish) -> Result<usize, SystemError> {
        if self.restaurants.get(&restaurant_id).is_none() {
            return Err(SystemError::RestaurantNotFound(restaurant_id));
        }
        let RestaurantActionResult::AddDish(index) =
            self.restaurants.perform_action(&restaurant_id, RestaurantAction::AddDish(dish))?;
        Ok(index)
    }

    pub fn add_courier(&mut self, courier: Courier) {
        self.delivery_manager.add_courier(courier);
    }

    /// Places an order for the menu entries at `dish_indices`.
    ///
    /// The dishes are copied out of the menu, so the order total is fixed here.
    /// The order is appended to the client's history and starts as `Created`.
    #[instrument(skip(self))]
    pub fn place_order(
        &mut self,
        client_id: ClientId,
        restaurant_id: RestaurantId,
        dish_indices: &[usize],
    ) -> Result<OrderId, SystemError> {
        if self.clients.get(&client_id).is_none() {
            return Err(SystemError::ClientNotFound(client_id));
        }
        let restaurant = self
            .restaurants
            .get(&restaurant_id)
            .ok_or(SystemError::RestaurantNotFound(restaurant_id))?;

        let dishes = dish_indices
            .iter()
            .map(|&index| {
                restaurant.dish(index).cloned().ok_or(SystemError::DishNotFound {
                    restaurant: restaurant_id,
                    index,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let order = Order::new(OrderId(self.next_order_id), dishes, restaurant_id, client_id)?;
        let order_id = order.id;
        self.next_order_id += 1;
        debug!(%order_id, total = order.total(), "Order built");

        self.clients.perform_action(&client_id, ClientAction::AddOrder(order))?;
        info!(%order_id, %client_id, %restaurant_id, "Order placed");
        Ok(order_id)
    }

    /// Asks the delivery manager to assign a courier to a placed order.
    ///
    /// Returns the assigned courier. With an empty courier pool this fails with
    /// [`DeliveryError::NoCourierAvailable`](crate::delivery::DeliveryError::NoCourierAvailable)
    /// and the order stays `Created`.
    pub fn dispatch(&mut self, client_id: ClientId, order_id: OrderId) -> Result<Courier, SystemError> {
        let client = self
            .clients
            .get_mut(&client_id)
            .ok_or(SystemError::ClientNotFound(client_id))?;
        let order = client.order_mut(order_id).ok_or(SystemError::OrderNotFound {
            client: client_id,
            order: order_id,
        })?;
        let courier = self.delivery_manager.process_order(order)?;
        Ok(courier.clone())
    }

    pub fn order(&self, client_id: ClientId, order_id: OrderId) -> Result<&Order, SystemError> {
        self.clients
            .get(&client_id)
            .ok_or(SystemError::ClientNotFound(client_id))?
            .order(order_id)
            .ok_or(SystemError::OrderNotFound {
                client: client_id,
                order: order_id,
            })
    }

    /// Renders an order with its restaurant and client names.
    pub fn describe_order(&self, client_id: ClientId, order_id: OrderId) -> Result<String, SystemError> {
        let order = self.order(client_id, order_id)?;
        let client = self
            .clients
            .get(&client_id)
            .ok_or(SystemError::ClientNotFound(client_id))?;
        let restaurant = self
            .restaurants
            .get(&order.restaurant_id)
            .ok_or(SystemError::RestaurantNotFound(order.restaurant_id))?;
        Ok(format!(
            "Order from {} for {}, Status: {}, Total: {} UAH.",
            restaurant.name,
            client.name,
            order.status(),
            order.total()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::DeliveryError;
    use crate::model::{OrderStatus, Rating};

    fn system_with_menu() -> (DeliverySystem, ClientId, RestaurantId) {
        let mut system = DeliverySystem::new();
        let client = system
            .register_client(ClientCreate {
                name: "Oleh".into(),
                delivery_address: "Kyiv, 23".into(),
                contact: "097-454-7890".into(),
            })
            .unwrap();
        let restaurant = system
            .register_restaurant(RestaurantCreate {
                name: "Best Sushi".into(),
                address: "Pyrihiva 9".into(),
                cuisine: "Ukraine".into(),
                rating: 4.5,
            })
            .unwrap();
        system
            .add_dish(restaurant, Dish::new("Sushi Roll", "", 120.0, 200.0, 250, ["Fish"]).unwrap())
            .unwrap();
        system
            .add_dish(restaurant, Dish::new("Golybtsi", "", 150.0, 300.0, 350, ["Meat"]).unwrap())
            .unwrap();
        (system, client, restaurant)
    }

    #[test]
    fn test_place_order_snapshots_menu_prices() {
        let (mut system, client, restaurant) = system_with_menu();
        let order_id = system.place_order(client, restaurant, &[0, 1]).unwrap();

        let order = system.order(client, order_id).unwrap();
        assert_eq!(order.total(), 270.0);
        assert_eq!(order.status(), OrderStatus::Created);
        assert_eq!(
            system.describe_order(client, order_id).unwrap(),
            "Order from Best Sushi for Oleh, Status: Created, Total: 270 UAH."
        );
    }

    #[test]
    fn test_order_ids_are_sequential() {
        let (mut system, client, restaurant) = system_with_menu();
        let first = system.place_order(client, restaurant, &[0]).unwrap();
        let second = system.place_order(client, restaurant, &[1]).unwrap();
        assert_eq!((first, second), (OrderId(1), OrderId(2)));
        assert_eq!(system.clients().get(&client).unwrap().orders().len(), 2);
    }

    #[test]
    fn test_unknown_dish_places_nothing() {
        let (mut system, client, restaurant) = system_with_menu();
        let err = system.place_order(client, restaurant, &[0, 5]).unwrap_err();
        assert_eq!(err, SystemError::DishNotFound { restaurant, index: 5 });
        assert!(system.clients().get(&client).unwrap().orders().is_empty());
    }

    #[test]
    fn test_unknown_ids_are_reported() {
        let (mut system, client, restaurant) = system_with_menu();
        assert_eq!(
            system.place_order(ClientId(42), restaurant, &[0]),
            Err(SystemError::ClientNotFound(ClientId(42)))
        );
        assert_eq!(
            system.place_order(client, RestaurantId(42), &[0]),
            Err(SystemError::RestaurantNotFound(RestaurantId(42)))
        );
        assert_eq!(
            system.dispatch(client, OrderId(42)),
            Err(SystemError::OrderNotFound { client, order: OrderId(42) })
        );
    }

    #[test]
    fn test_dispatch_updates_order_in_history() {
        let (mut system, client, restaurant) = system_with_menu();
        system.add_courier(Courier::new("Ivan", "i@example.com", Rating::new(4.6).unwrap(), "Car"));
        let order_id = system.place_order(client, restaurant, &[1]).unwrap();

        let courier = system.dispatch(client, order_id).unwrap();

        assert_eq!(courier.name, "Ivan");
        let order = system.order(client, order_id).unwrap();
        assert_eq!(order.status(), OrderStatus::InDelivery);
        assert_eq!(order.courier(), Some(&courier));
    }

    #[test]
    fn test_dispatch_without_couriers_keeps_order_created() {
        let (mut system, client, restaurant) = system_with_menu();
        let order_id = system.place_order(client, restaurant, &[0]).unwrap();

        let err = system.dispatch(client, order_id).unwrap_err();

        assert_eq!(err, SystemError::Delivery(DeliveryError::NoCourierAvailable));
        let order = system.order(client, order_id).unwrap();
        assert_eq!(order.status(), OrderStatus::Created);
        assert!(order.courier().is_none());
    }
}
