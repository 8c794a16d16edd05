//! Service configuration
//!
//! Layers, lowest precedence first:
//! 1. compiled defaults
//! 2. optional `pulse.toml` (or the file named by `PULSE_CONFIG`)
//! 3. `PULSE__*` environment variables, nested with `__`
//!    (e.g. `PULSE__PLANNER__ORDERS_PER_TRIP=1.9`)
//! 4. bare `PORT`, as set by most hosting platforms

use anyhow::{Context, Result};
use pulse_planner::PlannerSettings;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Config file looked up when `PULSE_CONFIG` is unset
pub const DEFAULT_CONFIG_FILE: &str = "pulse.toml";

/// Pulse service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PulseConfig {
    /// Service host
    pub host: String,
    /// Service port
    pub port: u16,
    /// Estimator constants, grade thresholds and ideal targets
    pub planner: PlannerSettings,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8085,
            planner: PlannerSettings::default(),
        }
    }
}

impl PulseConfig {
    /// Load configuration from environment and files
    pub fn load() -> Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();

        let path =
            std::env::var("PULSE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        let mut cfg = Self::from_file(&path)?;

        if let Ok(port) = std::env::var("PORT") {
            cfg.override_port(&port);
        }

        cfg.planner.validate()?;
        Ok(cfg)
    }

    /// Defaults, then `path` if it exists, then `PULSE__*` variables
    pub fn from_file(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(
                config::Config::try_from(&Self::default())
                    .context("Failed to serialize default configuration")?,
            )
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("PULSE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path))?;

        settings
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// Apply a hosting-platform `PORT`; anything that is not a valid port is ignored
    pub fn override_port(&mut self, raw: &str) {
        match raw.trim().parse::<u16>() {
            Ok(port) => self.port = port,
            Err(_) => warn!(value = raw, "Ignoring invalid PORT"),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
