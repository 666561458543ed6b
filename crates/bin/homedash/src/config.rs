//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `homedash.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use homedash_app::runtime::MAX_TICK_RATE_HZ;
use serde::Deserialize;

/// Filter used when none is configured or the configured one is invalid.
pub const DEFAULT_LOG_FILTER: &str = "homedash=info,homedash_app=info,homedash_adapter_terminal=info";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Render loop settings.
    pub display: DisplayConfig,
    /// Demo house settings.
    pub house: HouseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Render loop configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Ticks per second.
    pub tick_rate_hz: u32,
}

/// Demo house configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HouseConfig {
    /// Floor names, bottom to top.
    pub floors: Vec<String>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `homedash.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// result fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("homedash.toml")?;
        config.apply_overrides(|name| std::env::var(name).ok());
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

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("HOMEDASH_TICK_RATE")
            && let Ok(rate) = val.parse()
        {
            self.display.tick_rate_hz = rate;
        }
        if let Some(val) = var("HOMEDASH_FLOORS") {
            self.house.floors = val.split(',').map(|s| s.trim().to_string()).collect();
        }
        if let Some(val) = var("HOMEDASH_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.display.tick_rate_hz == 0 || self.display.tick_rate_hz > MAX_TICK_RATE_HZ {
            return Err(ConfigError::Validation(format!(
                "tick_rate_hz must be within 1..={MAX_TICK_RATE_HZ}"
            )));
        }
        if self.house.floors.is_empty() {
            return Err(ConfigError::Validation("at least one floor is required".to_string()));
        }
        if self.house.floors.iter().any(String::is_empty) {
            return Err(ConfigError::Validation("floor names must not be empty".to_string()));
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { tick_rate_hz: 60 }
    }
}

impl Default for HouseConfig {
    fn default() -> Self {
        Self {
            floors: vec!["Ground Floor".to_string(), "First Floor".to_string()],
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
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
