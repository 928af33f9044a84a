use crate::model::ModelError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Display;

/// A menu item.
///
/// Dishes are plain values: an [`Order`](crate::model::Order) keeps its own
/// copies, so nothing done to a menu after the order is placed reaches it.
/// Fields are read-only once the dish is built, and deserialization goes
/// through the same checks as [`Dish::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DishCreate")]
pub struct Dish {
    name: String,
    description: String,
    price: f64,
    weight: f64,
    calories: u32,
    allergens: BTreeSet<String>,
}

/// Payload describing a dish in serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub weight: f64,
    pub calories: u32,
    #[serde(default)]
    pub allergens: BTreeSet<String>,
}

impl Dish {
    /// Creates a new Dish, rejecting a negative or non-finite price or weight.
    ///
    /// # Arguments
    /// * `name` - Dish name
    /// * `description` - Short menu description
    /// * `price` - Price in UAH
    /// * `weight` - Weight in grams
    /// * `calories` - Calorie count
    /// * `allergens` - Allergen tags; duplicates collapse
    pub fn new<A>(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        weight: f64,
        calories: u32,
        allergens: A,
    ) -> Result<Self, ModelError>
    where
        A: IntoIterator,
        A::Item: Into<String>,
    {
        if !price.is_finite() || price < 0.0 {
            return Err(ModelError::InvalidPrice(price));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(ModelError::InvalidWeight(weight));
        }
        Ok(Self {
            name: name.into(),
            description: description.into(),
            price,
            weight,
            calories,
            allergens: allergens.into_iter().map(Into::into).collect(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Price in UAH.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Weight in grams.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn calories(&self) -> u32 {
        self.calories
    }

    pub fn allergens(&self) -> &BTreeSet<String> {
        &self.allergens
    }
}

impl TryFrom<DishCreate> for Dish {
    type Error = ModelError;

    fn try_from(params: DishCreate) -> Result<Self, Self::Error> {
        Self::new(
            params.name,
            params.description,
            params.price,
            params.weight,
            params.calories,
            params.allergens,
        )
    }
}

impl Display for Dish {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} UAH) - {}. Calories: {} kcal.",
            self.name, self.price, self.description, self.calories
        )
    }
}
