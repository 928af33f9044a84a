use super::{Picker, SimulationError};
use crate::config::SimulationConfig;
use crate::delivery::{DeliveryError, DeliveryManager};
use crate::lifecycle::{DeliverySystem, SystemError};
use crate::model::{
    ClientCreate, ClientId, Courier, Dish, OrderId, RestaurantCreate, RestaurantId,
};
use tracing::{info, instrument};

/// Result of one simulated order.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOutcome {
    pub client_id: ClientId,
    pub order_id: OrderId,
    /// The assigned courier, or why none was assigned.
    pub dispatch: Result<Courier, DeliveryError>,
}

/// Drives the sample scenario: random client, random dish from the sample
/// menu, one order, one dispatch.
pub struct Simulation<P: Picker> {
    system: DeliverySystem,
    picker: P,
    sample_restaurant: Option<RestaurantId>,
}

impl<P: Picker> Simulation<P> {
    pub fn new(picker: P) -> Self {
        Self {
            system: DeliverySystem::new(),
            picker,
            sample_restaurant: None,
        }
    }

    /// Registers the configured clients and couriers, in file order.
    pub fn from_config(config: SimulationConfig, picker: P) -> Result<Self, SimulationError> {
        let mut manager = DeliveryManager::new();
        for params in config.couriers {
            manager.add_courier(Courier::try_from(params)?);
        }
        let mut simulation = Self {
            system: DeliverySystem::with_manager(manager),
            picker,
            sample_restaurant: None,
        };
        for params in config.clients {
            simulation.add_client(params)?;
        }
        Ok(simulation)
    }

    pub fn add_client(&mut self, params: ClientCreate) -> Result<ClientId, SimulationError> {
        Ok(self.system.register_client(params)?)
    }

    pub fn add_courier(&mut self, courier: Courier) {
        self.system.add_courier(courier);
    }

    pub fn system(&self) -> &DeliverySystem {
        &self.system
    }

    pub fn picker(&self) -> &P {
        &self.picker
    }

    /// Places one order for a random client and a random sample dish, then
    /// dispatches it.
    ///
    /// An empty courier pool is not an error here: it is reported in
    /// [`SimulationOutcome::dispatch`] and the order stays `Created`.
    #[instrument(skip(self))]
    pub fn create_and_process_random_order(&mut self) -> Result<SimulationOutcome, SimulationError> {
        let client_ids = self.system.clients().ids();
        if client_ids.is_empty() {
            return Err(SimulationError::NoClients);
        }
        let client_id = client_ids[self.picker.pick(client_ids.len())];

        let restaurant_id = self.sample_restaurant()?;
        let menu_len = self
            .system
            .restaurants()
            .get(&restaurant_id)
            .map_or(0, |restaurant| restaurant.menu().len());
        let dish_index = self.picker.pick(menu_len);

        let order_id = self.system.place_order(client_id, restaurant_id, &[dish_index])?;
        let dispatch = match self.system.dispatch(client_id, order_id) {
            Ok(courier) => Ok(courier),
            Err(SystemError::Delivery(e)) => Err(e),
            Err(e) => return Err(e.into()),
        };
        let summary = self.system.describe_order(client_id, order_id)?;
        info!(order = %summary, "Simulated order processed");

        Ok(SimulationOutcome {
            client_id,
            order_id,
            dispatch,
        })
    }

    /// Registers "Best Sushi" and its two-dish menu on first use.
    fn sample_restaurant(&mut self) -> Result<RestaurantId, SimulationError> {
        if let Some(id) = self.sample_restaurant {
            return Ok(id);
        }
        let id = self.system.register_restaurant(RestaurantCreate {
            name: "Best Sushi".to_string(),
            address: "Pyrihiva 9".to_string(),
            cuisine: "Ukraine".to_string(),
            rating: 4.5,
        })?;
        self.system.add_dish(
            id,
            Dish::new("Sushi Roll", "Delicious sushi roll", 120.0, 200.0, 250, ["Fish", "Rice"])?,
        )?;
        self.system.add_dish(
            id,
            Dish::new("Golybtsi", "Cabbage rolls", 150.0, 300.0, 350, ["Cabbage", "Meat"])?,
        )?;
        self.sample_restaurant = Some(id);
        Ok(id)
    }
}
