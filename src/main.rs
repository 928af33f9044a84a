//! Runs one simulated order against the configured sample data.
//!
//! Prints `Courier <name> assigned to order.` on stdout when a courier is
//! assigned; everything else goes to the log.

use delivery_sim::config::SimulationConfig;
use delivery_sim::lifecycle::setup_tracing;
use delivery_sim::simulation::{RandomPicker, Simulation};
use std::error::Error;
use tracing::{info, warn};

fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    let config = SimulationConfig::from_env()?;
    let picker = match config.seed {
        Some(seed) => {
            info!(seed, "Using seeded picker");
            RandomPicker::seeded(seed)
        }
        None => RandomPicker::from_entropy(),
    };

    let mut simulation = Simulation::from_config(config, picker)?;
    info!(
        clients = simulation.system().clients().len(),
        couriers = simulation.system().delivery_manager().len(),
        "Simulation ready"
    );

    let outcome = simulation.create_and_process_random_order()?;
    match outcome.dispatch {
        Ok(courier) => println!("Courier {} assigned to order.", courier.name),
        Err(e) => warn!(order_id = %outcome.order_id, error = %e, "Order left unassigned"),
    }

    Ok(())
}
