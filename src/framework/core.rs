//! # Core Resource Framework
//!
//! This module defines the generic building blocks for owning domain entities.
//!
//! ## Key Types
//!
//! - [`Entity`]: The trait that all resource types must implement.
//! - [`ResourceStore`]: The generic store that owns entities and routes actions to them.
//! - [`FrameworkError`]: Common errors (e.g., NotFound).

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION (Traits, DTOs, and Actions)
// =============================================================================

/// Trait that any resource entity must implement to be managed by a [`ResourceStore`].
///
/// # Architecture Note
/// By defining a contract (`Entity`) that the registered resource types (Client,
/// Restaurant) satisfy, the store logic is written *once* and reused for each of them.
///
/// Associated types enforce type safety: a `Client` requires a `ClientCreate`
/// payload and a `ClientAction`, and the compiler rejects a `RestaurantAction`
/// sent to the client store.
pub trait Entity: Clone + Debug {
    /// The unique identifier for this entity (e.g., `ClientId`).
    type Id: Eq + Hash + Clone + Display + Debug;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type CreateParams: Debug;

    /// Enum representing resource-specific operations (e.g., `AddDish`).
    type Action: Debug;

    /// The result type returned by custom actions.
    type ActionResult: Debug;

    /// Construct the full Entity from the ID and Payload.
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, String>;

    /// Handle a custom resource-specific action.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, String>;
}

// =============================================================================
// 2. THE ERRORS
// =============================================================================

/// Errors that can occur within the resource framework itself.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Custom error: {0}")]
    Custom(String),
}

// =============================================================================
// 3. THE GENERIC STORE
// =============================================================================

/// The generic store that owns a collection of entities.
///
/// Entities are keyed by their id and also remembered in registration order, so
/// [`ResourceStore::ids`] and [`ResourceStore::iter`] are stable. Nothing is ever
/// removed: the stores in this crate are append-only.
pub struct ResourceStore<T: Entity> {
    store: HashMap<T::Id, T>,
    order: Vec<T::Id>,
    next_id_fn: Box<dyn FnMut() -> T::Id>,
}

impl<T: Entity> ResourceStore<T> {
    pub fn new(next_id_fn: impl FnMut() -> T::Id + 'static) -> Self {
        Self {
            store: HashMap::new(),
            order: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
        }
    }

    /// Short type name used as the `entity_type` field in logs
    /// (e.g. "Client" instead of "delivery_sim::model::client::Client").
    fn entity_type() -> &'static str {
        std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown")
    }

    /// Creates a new entity from its payload and returns the generated id.
    ///
    /// A rejected payload still consumes an id.
    pub fn create(&mut self, params: T::CreateParams) -> Result<T::Id, FrameworkError> {
        let entity_type = Self::entity_type();
        debug!(entity_type, ?params, "Create");
        let id = (self.next_id_fn)();

        match T::from_create_params(id.clone(), params) {
            Ok(item) => {
                self.store.insert(id.clone(), item);
                self.order.push(id.clone());
                info!(entity_type, %id, size = self.store.len(), "Created");
                Ok(id)
            }
            Err(e) => {
                warn!(entity_type, error = %e, "Create failed");
                Err(FrameworkError::Custom(e))
            }
        }
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        let item = self.store.get(id);
        debug!(entity_type = Self::entity_type(), %id, found = item.is_some(), "Get");
        item
    }

    pub fn get_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        self.store.get_mut(id)
    }

    /// Runs a custom action against the entity with the given id.
    pub fn perform_action(
        &mut self,
        id: &T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        let entity_type = Self::entity_type();
        debug!(entity_type, %id, ?action, "Action");
        let Some(item) = self.store.get_mut(id) else {
            warn!(entity_type, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };
        let result = item.handle_action(action).map_err(FrameworkError::Custom);
        match &result {
            Ok(_) => info!(entity_type, %id, "Action ok"),
            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
        }
        result
    }

    /// Ids in registration order.
    pub fn ids(&self) -> &[T::Id] {
        &self.order
    }

    /// Entities in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&T::Id, &T)> {
        self.order
            .iter()
            .filter_map(move |id| self.store.get(id).map(|item| (id, item)))
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

// =============================================================================
// 4. EXAMPLE USAGE (Test)
// =============================================================================
