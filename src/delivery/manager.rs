use super::DeliveryError;
use crate::model::{Courier, Order};
use tracing::{debug, info, instrument, warn};

/// Owns the courier pool and binds couriers to orders.
///
/// The pool is append-only and allows duplicates. Couriers are not taken out
/// of the pool once assigned.
#[derive(Debug, Clone, Default)]
pub struct DeliveryManager {
    couriers: Vec<Courier>,
}

impl DeliveryManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_courier(&mut self, courier: Courier) {
        debug!(courier = %courier.name, pool = self.couriers.len() + 1, "Courier registered");
        self.couriers.push(courier);
    }

    /// Couriers in registration order.
    pub fn couriers(&self) -> &[Courier] {
        &self.couriers
    }

    pub fn len(&self) -> usize {
        self.couriers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.couriers.is_empty()
    }

    /// Returns the highest-rated courier, or `None` for an empty pool.
    ///
    /// Ties go to the courier registered first.
    pub fn assign_courier(&self) -> Option<&Courier> {
        // Iterator::max_by would keep the last of equal elements.
        self.couriers.iter().fold(None, |best: Option<&Courier>, courier| match best {
            Some(current) if current.rating >= courier.rating => Some(current),
            _ => Some(courier),
        })
    }

    /// Selects a courier, binds it to `order` and moves the order to `InDelivery`.
    ///
    /// On any error the order is left unchanged.
    #[instrument(skip_all, fields(order_id = %order.id))]
    pub fn process_order(&self, order: &mut Order) -> Result<&Courier, DeliveryError> {
        let Some(courier) = self.assign_courier() else {
            warn!("No courier available");
            return Err(DeliveryError::NoCourierAvailable);
        };
        order.assign_courier(courier.clone())?;
        info!(courier = %courier.name, rating = %courier.rating, "Courier assigned");
        Ok(courier)
    }
}
