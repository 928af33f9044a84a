//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Output uses the compact format and hides the crate/module prefix
//! (`with_target(false)`); stores log an `entity_type` field instead.
//! Verbosity is controlled with `RUST_LOG`, defaulting to `info`.
//!
//! ## What Gets Traced
//!
//! - **Store Operations**: Create, Get and custom Actions on clients and restaurants
//! - **Dispatch**: courier selection, with the order id attached as a span field
//! - **Errors**: an empty courier pool or a rejected transition, at `warn`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! cargo run
//!
//! # Show full payloads
//! RUST_LOG=debug cargo run
//!
//! # Filter to specific modules
//! RUST_LOG=delivery_sim::delivery=debug cargo run
//! ```
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Created entity_type="Client" id=client_1 size=1
//! INFO Created entity_type="Restaurant" id=restaurant_1 size=1
//! INFO Action ok entity_type="Client" id=client_2
//! INFO process_order: Courier assigned order_id=order_1 courier="Oleksandr" rating=4.8
//! ```
//!
//! Logs go to stderr so stdout only carries the assignment line.

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
