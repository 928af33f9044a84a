//! Customer orders and their status.
//!
//! An order snapshots its dishes and total when it is created. It refers back
//! to its restaurant and client by id and, once dispatched, holds a copy of
//! the assigned courier.

use crate::model::{ClientId, Courier, Dish, ModelError, RestaurantId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Lifecycle of an order.
///
/// The only transition is `Created -> InDelivery`. There is no delivered or
/// cancelled state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Created,
    InDelivery,
}

impl OrderStatus {
    /// Returns `true` only for the single forward step.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        matches!((self, next), (OrderStatus::Created, OrderStatus::InDelivery))
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Created => write!(f, "Created"),
            OrderStatus::InDelivery => write!(f, "In delivery"),
        }
    }
}

/// Serialize-only: an order is built through [`Order::new`] and advanced through
/// [`Order::assign_courier`], never assembled from raw fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub restaurant_id: RestaurantId,
    pub client_id: ClientId,
    dishes: Vec<Dish>,
    total: f64,
    status: OrderStatus,
    courier: Option<Courier>,
}

impl Order {
    /// Creates a new Order in the `Created` state.
    ///
    /// # Arguments
    /// * `id` - Unique identifier
    /// * `dishes` - Ordered dishes; must not be empty
    /// * `restaurant_id` - Restaurant the dishes come from
    /// * `client_id` - Client placing the order
    ///
    /// # Notes
    /// The total is computed here once and never recomputed.
    pub fn new(
        id: OrderId,
        dishes: Vec<Dish>,
        restaurant_id: RestaurantId,
        client_id: ClientId,
    ) -> Result<Self, ModelError> {
        if dishes.is_empty() {
            return Err(ModelError::EmptyOrder);
        }
        let total = dishes.iter().map(Dish::price).sum();
        Ok(Self {
            id,
            restaurant_id,
            client_id,
            dishes,
            total,
            status: OrderStatus::Created,
            courier: None,
        })
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn courier(&self) -> Option<&Courier> {
        self.courier.as_ref()
    }

    /// Moves the order to `next`, rejecting anything but the forward step.
    pub fn advance_status(&mut self, next: OrderStatus) -> Result<(), ModelError> {
        if !self.status.can_transition_to(next) {
            return Err(ModelError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }

    /// Binds a courier and moves the order to `InDelivery`.
    ///
    /// On error the order is left untouched.
    pub fn assign_courier(&mut self, courier: Courier) -> Result<(), ModelError> {
        self.advance_status(OrderStatus::InDelivery)?;
        self.courier = Some(courier);
        Ok(())
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} dishes), Status: {}, Total: {} UAH",
            self.id,
            self.dishes.len(),
            self.status,
            self.total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rating;

    fn dish(price: f64) -> Dish {
        Dish::new("dish", "", price, 100.0, 100, Vec::<String>::new()).unwrap()
    }

    fn order(prices: &[f64]) -> Order {
        let dishes = prices.iter().copied().map(dish).collect();
        Order::new(OrderId(1), dishes, RestaurantId(1), ClientId(1)).unwrap()
    }

    fn courier() -> Courier {
        Courier::new("Oleksandr", "o@example.com", Rating::new(4.8).unwrap(), "Bike")
    }

    #[test]
    fn test_total_is_sum_of_prices() {
        assert_eq!(order(&[120.0, 150.0]).total(), 270.0);
        assert_eq!(order(&[0.0]).total(), 0.0);
    }

    #[test]
    fn test_total_is_a_snapshot() {
        let mut menu = vec![dish(120.0), dish(150.0)];
        let order = Order::new(OrderId(1), menu.clone(), RestaurantId(1), ClientId(1)).unwrap();

        menu[0] = dish(999.0);

        assert_eq!(order.total(), 270.0);
        assert_eq!(order.dishes()[0].price(), 120.0);
    }

    #[test]
    fn test_empty_order_is_rejected() {
        let result = Order::new(OrderId(1), Vec::new(), RestaurantId(1), ClientId(1));
        assert_eq!(result, Err(ModelError::EmptyOrder));
    }

    #[test]
    fn test_new_order_is_created_without_courier() {
        let order = order(&[10.0]);
        assert_eq!(order.status(), OrderStatus::Created);
        assert!(order.courier().is_none());
    }

    #[test]
    fn test_transition_table() {
        use OrderStatus::*;
        assert!(Created.can_transition_to(InDelivery));
        assert!(!Created.can_transition_to(Created));
        assert!(!InDelivery.can_transition_to(Created));
        assert!(!InDelivery.can_transition_to(InDelivery));
    }

    #[test]
    fn test_assign_courier_moves_to_in_delivery() {
        let mut order = order(&[10.0]);
        order.assign_courier(courier()).unwrap();

        assert_eq!(order.status(), OrderStatus::InDelivery);
        assert_eq!(order.courier().map(|c| c.name.as_str()), Some("Oleksandr"));
    }

    #[test]
    fn test_second_assignment_is_rejected_and_keeps_first_courier() {
        let mut order = order(&[10.0]);
        order.assign_courier(courier()).unwrap();

        let other = Courier::new("Ivan", "i@example.com", Rating::new(5.0).unwrap(), "Car");
        let err = order.assign_courier(other).unwrap_err();

        assert_eq!(
            err,
            ModelError::InvalidTransition {
                from: OrderStatus::InDelivery,
                to: OrderStatus::InDelivery,
            }
        );
        assert_eq!(order.courier().map(|c| c.name.as_str()), Some("Oleksandr"));
    }

    #[test]
    fn test_backward_transition_is_rejected() {
        let mut order = order(&[10.0]);
        order.advance_status(OrderStatus::InDelivery).unwrap();
        assert!(order.advance_status(OrderStatus::Created).is_err());
        assert_eq!(order.status(), OrderStatus::InDelivery);
    }
}
