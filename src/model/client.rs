use crate::model::{Order, OrderId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(pub u32);

impl From<u32> for ClientId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "client_{}", self.0)
    }
}

/// A customer placing orders.
///
/// # Resource Framework
/// This struct implements the [`Entity`](crate::framework::Entity) trait,
/// allowing it to be owned by a [`ResourceStore`](crate::framework::ResourceStore).
///
/// The client owns its order history; orders are only ever appended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub delivery_address: String,
    pub contact: String,
    orders: Vec<Order>,
}

/// Payload for registering a new client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientCreate {
    pub name: String,
    pub delivery_address: String,
    pub contact: String,
}

impl Client {
    /// Creates a new Client with an empty order history.
    pub fn new(
        id: ClientId,
        name: impl Into<String>,
        delivery_address: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            delivery_address: delivery_address.into(),
            contact: contact.into(),
            orders: Vec::new(),
        }
    }

    /// Appends an order to the history.
    pub fn add_order(&mut self, order: Order) {
        self.orders.push(order);
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    pub fn order_mut(&mut self, id: OrderId) -> Option<&mut Order> {
        self.orders.iter_mut().find(|order| order.id == id)
    }
}

impl Display for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, Delivery address: {}, Contact: {}",
            self.name, self.delivery_address, self.contact
        )
    }
}
