//! Simulation parameters.
//!
//! Defaults reproduce the built-in sample scenario. They can be replaced by a
//! JSON file named in `DELIVERY_SIM_CONFIG`, and the RNG seed can be pinned with
//! `DELIVERY_SIM_SEED`.

use crate::model::{ClientCreate, CourierCreate};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Path of an optional JSON configuration file.
pub const CONFIG_PATH_VAR: &str = "DELIVERY_SIM_CONFIG";

/// Optional `u64` seed for the simulation RNG.
pub const SEED_VAR: &str = "DELIVERY_SIM_SEED";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid seed {0:?}: expected an unsigned integer")]
    InvalidSeed(String),
}

/// Clients, couriers and seed for one simulation run.
///
/// Missing fields in a config file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub clients: Vec<ClientCreate>,
    pub couriers: Vec<CourierCreate>,
    /// `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            clients: vec![
                ClientCreate {
                    name: "Oleh".to_string(),
                    delivery_address: "Kyiv, 23".to_string(),
                    contact: "097-454-7890".to_string(),
                },
                ClientCreate {
                    name: "Mariia".to_string(),
                    delivery_address: "Lviv, 45".to_string(),
                    contact: "098-765-4321".to_string(),
                },
            ],
            couriers: vec![
                CourierCreate {
                    name: "Oleksandr".to_string(),
                    contact: "oleksandr@example.com".to_string(),
                    rating: 4.8,
                    transport: "Bike".to_string(),
                },
                CourierCreate {
                    name: "Ivan".to_string(),
                    contact: "ivan@example.com".to_string(),
                    rating: 4.6,
                    transport: "Car".to_string(),
                },
            ],
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Reads a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Builds the configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SimulationConfig::from_env`] with an injectable variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match lookup(CONFIG_PATH_VAR) {
            Some(path) => {
                info!(%path, "Loading simulation config");
                Self::from_file(path)?
            }
            None => Self::default(),
        };
        if let Some(raw) = lookup(SEED_VAR) {
            let seed = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidSeed(raw.clone()))?;
            config.seed = Some(seed);
        }
        debug!(?config, "Simulation config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}.json", name, std::process::id()));
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_defaults_match_sample_scenario() {
        let config = SimulationConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SimulationConfig::default());
        assert_eq!(config.clients.len(), 2);
        let ratings: Vec<_> = config.couriers.iter().map(|c| c.rating).collect();
        assert_eq!(ratings, [4.8, 4.6]);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_seed_from_env() {
        let config = SimulationConfig::from_lookup(lookup(&[(SEED_VAR, " 42 ")])).unwrap();
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_invalid_seed_is_rejected() {
        let err = SimulationConfig::from_lookup(lookup(&[(SEED_VAR, "forty-two")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSeed(raw) if raw == "forty-two"));
    }

    #[test]
    fn test_partial_file_keeps_default_clients() {
        let path = write_temp(
            "delivery-sim-partial",
            r#"{ "couriers": [ { "name": "Solo", "contact": "solo@example.com", "rating": 3.5, "transport": "Scooter" } ], "seed": 7 }"#,
        );
        let path_str = path.to_string_lossy().to_string();

        let config = SimulationConfig::from_lookup(lookup(&[(CONFIG_PATH_VAR, path_str.as_str())])).unwrap();

        assert_eq!(config.clients, SimulationConfig::default().clients);
        assert_eq!(config.couriers.len(), 1);
        assert_eq!(config.couriers[0].name, "Solo");
        assert_eq!(config.seed, Some(7));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_env_seed_overrides_file_seed() {
        let path = write_temp("delivery-sim-seed", r#"{ "seed": 7 }"#);
        let path_str = path.to_string_lossy().to_string();

        let config =
            SimulationConfig::from_lookup(lookup(&[(CONFIG_PATH_VAR, path_str.as_str()), (SEED_VAR, "9")])).unwrap();

        assert_eq!(config.seed, Some(9));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let path = write_temp("delivery-sim-bad", "{ not json");
        let err = SimulationConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = SimulationConfig::from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
