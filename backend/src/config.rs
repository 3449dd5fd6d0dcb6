//! Configuration management for the Farm Dashboard server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with FARM_ prefix

use std::time::Duration;

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::GpsCoordinates;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Default farm location for weather advisories
    pub farm: FarmConfig,

    /// Default market outlook selection
    pub market: MarketConfig,

    /// Simulated provider behaviour
    pub simulation: SimulationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FarmConfig {
    pub latitude: f64,
    pub longitude: f64,
}

impl FarmConfig {
    pub fn location(&self) -> GpsCoordinates {
        GpsCoordinates::new(self.latitude, self.longitude)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct MarketConfig {
    /// Crop shown when the client does not pick one
    pub crop: String,

    /// Market shown when the client does not pick one
    pub location: String,

    /// Forecast horizon in weeks
    pub horizon_weeks: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SimulationConfig {
    /// Artificial delay applied before each forecast is returned
    pub latency_ms: u64,
}

impl SimulationConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("FARM_ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let nairobi = GpsCoordinates::nairobi();

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("farm.latitude", nairobi.latitude)?
            .set_default("farm.longitude", nairobi.longitude)?
            .set_default("market.crop", "Maize")?
            .set_default("market.location", "Nairobi")?
            .set_default("market.horizon_weeks", shared::DEFAULT_HORIZON_WEEKS as i64)?
            .set_default("simulation.latency_ms", 300)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (FARM_ prefix)
            .add_source(
                Environment::with_prefix("FARM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            farm: FarmConfig::default(),
            market: MarketConfig::default(),
            simulation: SimulationConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for FarmConfig {
    fn default() -> Self {
        let nairobi = GpsCoordinates::nairobi();
        Self {
            latitude: nairobi.latitude,
            longitude: nairobi.longitude,
        }
    }
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            crop: "Maize".to_string(),
            location: "Nairobi".to_string(),
            horizon_weeks: shared::DEFAULT_HORIZON_WEEKS,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { latency_ms: 300 }
    }
}
