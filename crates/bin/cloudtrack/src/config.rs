//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `cloudtrack.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Usage simulation settings.
    pub simulation: SimulationConfig,
    /// Services registered when the simulation starts.
    pub services: ServicesConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Usage simulation configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Lower bound (inclusive) of the random hours added per service.
    pub min_hours: u32,
    /// Upper bound (inclusive) of the random hours added per service.
    pub max_hours: u32,
    /// Seed for the random generator; unset means a fresh seed per run.
    pub seed: Option<u64>,
    /// Service id deactivated after the first report; unset skips that step.
    pub deactivate: Option<u64>,
}

/// Services seeded into the registry, in order.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct ServicesConfig(pub Vec<ServiceConfig>);

/// One seeded service.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub service_type: String,
    pub hourly_cost: f64,
}

impl ServiceConfig {
    fn new(name: &str, service_type: &str, hourly_cost: f64) -> Self {
        Self {
            name: name.to_string(),
            service_type: service_type.to_string(),
            hourly_cost,
        }
    }
}

impl Config {
    /// Load configuration from `cloudtrack.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is inconsistent.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("cloudtrack.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("CLOUDTRACK_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("CLOUDTRACK_SEED")
            && let Ok(seed) = val.parse()
        {
            self.simulation.seed = Some(seed);
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.simulation.min_hours > self.simulation.max_hours {
            return Err(ConfigError::Validation(format!(
                "min_hours ({}) must not exceed max_hours ({})",
                self.simulation.min_hours, self.simulation.max_hours
            )));
        }
        if let Some(service) = self.services.0.iter().find(|s| s.name.is_empty()) {
            return Err(ConfigError::Validation(format!(
                "service of type {:?} has an empty name",
                service.service_type
            )));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "cloudtrack=info,cloudtrack_app=info".to_string(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            min_hours: 10,
            max_hours: 50,
            seed: None,
            deactivate: Some(2),
        }
    }
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self(vec![
            ServiceConfig::new("Compute Engine", "VM", 0.25),
            ServiceConfig::new("Cloud Storage", "Storage", 0.10),
            ServiceConfig::new("SQL Database", "Database", 0.30),
        ])
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
