use crate::model::Rating;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A courier that can be bound to an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Courier {
    pub name: String,
    pub contact: String,
    pub rating: Rating,
    pub transport: String,
}

impl Courier {
    /// Creates a new Courier.
    ///
    /// # Arguments
    /// * `name` - Courier's display name
    /// * `contact` - Phone number or email
    /// * `rating` - Score in `[0, 5]`
    /// * `transport` - Free-form transport tag (e.g. "Car", "Bike")
    pub fn new(
        name: impl Into<String>,
        contact: impl Into<String>,
        rating: Rating,
        transport: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
            rating,
            transport: transport.into(),
        }
    }
}

/// Payload describing a courier in configuration files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourierCreate {
    pub name: String,
    pub contact: String,
    pub rating: f64,
    pub transport: String,
}

impl TryFrom<CourierCreate> for Courier {
    type Error = crate::model::ModelError;

    fn try_from(params: CourierCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(
            params.name,
            params.contact,
            Rating::new(params.rating)?,
            params.transport,
        ))
    }
}

impl Display for Courier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}), Contact: {}, Rating: {}",
            self.name, self.transport, self.contact, self.rating
        )
    }
}
