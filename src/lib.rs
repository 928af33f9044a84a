//! # Delivery Simulation
//!
//! > **A small, typed model of a food-delivery workflow.**
//!
//! Clients order dishes from restaurants; a delivery manager binds the
//! highest-rated courier to each order and moves it into delivery.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Owned state, explicit results
//!
//! - **Ownership**: every collection has exactly one owner and is only mutated
//!   through that owner's methods (the client store, the restaurant store, the
//!   courier pool).
//! - **Closed status**: [`OrderStatus`](model::OrderStatus) is an enum with a
//!   validated transition, not free text.
//! - **No silent no-ops**: dispatching with an empty courier pool returns
//!   [`DeliveryError::NoCourierAvailable`](delivery::DeliveryError::NoCourierAvailable).
//!
//! ## 🚀 Core Concepts
//!
//! ### Generics: The `Entity` Trait
//! Clients and restaurants live in a `ResourceStore<T: Entity>`. The store is
//! written once; each entity supplies its creation payload and its own
//! `Action` enum (`AddOrder`, `AddDish`).
//!
//! ### Snapshots
//! An [`Order`](model::Order) copies its dishes and computes its total when it
//! is placed. Later menu changes do not reach existing orders.
//!
//! ### Injectable randomness
//! The simulation picks clients and dishes through the
//! [`Picker`](simulation::Picker) trait. Tests use
//! [`ScriptedPicker`](simulation::ScriptedPicker).
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Role**: generic ownership of registered entities, with traced operations.
//! - **Key items**: [`Entity`](framework::Entity), [`ResourceStore`](framework::ResourceStore).
//!
//! ### 2. The Model ([`model`])
//! - **Role**: dishes, restaurants, couriers, clients, orders, ratings.
//!
//! ### 3. The Stores ([`client_store`], [`restaurant_store`])
//! - **Role**: `Entity` implementations and store factories with id generators.
//!
//! ### 4. Dispatch ([`delivery`])
//! - **Role**: the courier pool and the highest-rating assignment rule.
//! - **Key items**: [`DeliveryManager`](delivery::DeliveryManager).
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! - **Role**: wires stores and pool together, places and dispatches orders,
//!   sets up tracing.
//! - **Key items**: [`DeliverySystem`](lifecycle::DeliverySystem).
//!
//! ### 6. The Driver ([`simulation`], [`config`])
//! - **Role**: the sample scenario, configurable through env vars and JSON.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the sample scenario
//! cargo run
//!
//! # Reproducible run with debug logs
//! DELIVERY_SIM_SEED=42 RUST_LOG=debug cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod client_store;
pub mod config;
pub mod delivery;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod restaurant_store;
pub mod simulation;
