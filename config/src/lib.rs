//! # Configuration Management for StoreLens
//!
//! This crate provides centralized configuration structures for all StoreLens
//! components: the translating store options, cache bounds, and telemetry
//! sampling.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::{StoreConfig, CacheConfig, TelemetryConfig};
//!
//! // Translating store options
//! let store_config = StoreConfig::new("main", "namespace");
//!
//! // Translation cache bound
//! let cache_config = CacheConfig::new(512);
//!
//! // Telemetry sampling interval
//! let telemetry_config = TelemetryConfig::new(1000);
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [store]
//! os = "main"
//! translator_class = "namespace"
//!
//! [cache]
//! query_capacity = 512
//!
//! [telemetry]
//! sample_every = 1000
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::AppConfig;
//!
//! # fn main() -> Result<(), config::ConfigError> {
//! // Load from storelens.toml or the path named by STORELENS_CONFIG
//! let config = AppConfig::load()?;
//!
//! // Or load from a custom path
//! let config = AppConfig::from_file("config/production.toml")?;
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./storelens.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Environment variable error: {0}")]
    Env(#[from] env::VarError),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Translating store options
///
/// `os` names the underlying store in the registry and `translator_class`
/// names the translator implementation to construct. Both are required to
/// open a translating store; an absent option is surfaced as a configuration
/// error at construction time rather than at parse time, so partial files
/// still load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    pub os: Option<String>,
    pub translator_class: Option<String>,
}

/// Translation cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of translated queries kept in memory
    pub query_capacity: usize,
}

/// Telemetry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Emit one diagnostic sample every this many object lookups
    pub sample_every: u64,
}

impl AppConfig {
    /// Load configuration from the TOML file specified in .env or defaults
    pub fn load() -> Result<Self, ConfigError> {
        let config = {
            if Path::new(".env").exists() {
                dotenvy::dotenv()?;
            }

            // Try to load .env file for STORELENS_CONFIG path
            if let Ok(config_path) = env::var("STORELENS_CONFIG") {
                Self::from_file(&config_path)
            }
            // Try to load config from DEFAULT_CONFIG_PATH
            else if Path::new(DEFAULT_CONFIG_PATH).exists() {
                Self::from_file(DEFAULT_CONFIG_PATH)
            }
            // Return error if neither .env file nor default config file exists
            else {
                Err(ConfigError::Invalid(format!(
                    "Config path must be specified in .env file as STORELENS_CONFIG or in {} file",
                    DEFAULT_CONFIG_PATH
                )))
            }
        }?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Store options may be absent (checked at construction) but must not
        // be present-and-empty
        if let Some(os) = &self.store.os {
            if os.is_empty() {
                return Err(ConfigError::Invalid(
                    "Store 'os' option cannot be empty".to_string(),
                ));
            }
        }
        if let Some(translator_class) = &self.store.translator_class {
            if translator_class.is_empty() {
                return Err(ConfigError::Invalid(
                    "Store 'translator_class' option cannot be empty".to_string(),
                ));
            }
        }

        // Cache validations
        if self.cache.query_capacity == 0 {
            return Err(ConfigError::Invalid(
                "Cache query_capacity must be greater than 0".to_string(),
            ));
        }

        // Telemetry validations
        if self.telemetry.sample_every == 0 {
            return Err(ConfigError::Invalid(
                "Telemetry sample_every must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            cache: CacheConfig::default(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl StoreConfig {
    /// Create store options naming an underlying store and a translator
    pub fn new(os: &str, translator_class: &str) -> Self {
        Self {
            os: Some(os.to_string()),
            translator_class: Some(translator_class.to_string()),
        }
    }
}

impl CacheConfig {
    /// Create a new cache configuration
    pub fn new(query_capacity: usize) -> Self {
        Self { query_capacity }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            query_capacity: 512,
        }
    }
}

impl TelemetryConfig {
    /// Create a new telemetry configuration
    pub fn new(sample_every: u64) -> Self {
        Self { sample_every }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self { sample_every: 1000 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_toml_round_trip() {
        let config = AppConfig::from_toml(
            r#"
            [store]
            os = "main"
            translator_class = "namespace"

            [cache]
            query_capacity = 64

            [telemetry]
            sample_every = 100
            "#,
        )
        .expect("valid config should parse");

        assert_eq!(config.store.os.as_deref(), Some("main"));
        assert_eq!(config.store.translator_class.as_deref(), Some("namespace"));
        assert_eq!(config.cache.query_capacity, 64);
        assert_eq!(config.telemetry.sample_every, 100);
    }

    #[test]
    fn test_missing_sections_take_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [store]
            os = "main"
            translator_class = "namespace"
            "#,
        )
        .expect("partial config should parse");

        assert_eq!(config.cache.query_capacity, 512);
        assert_eq!(config.telemetry.sample_every, 1000);
    }

    #[test]
    fn test_missing_store_options_parse_as_none() {
        // Absence is reported at construction time, not at parse time
        let config = AppConfig::from_toml("").expect("empty config should parse");
        assert!(config.store.os.is_none());
        assert!(config.store.translator_class.is_none());
    }

    #[test]
    fn test_empty_os_rejected() {
        let result = AppConfig::from_toml(
            r#"
            [store]
            os = ""
            translator_class = "namespace"
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_zero_query_capacity_rejected() {
        let result = AppConfig::from_toml(
            r#"
            [cache]
            query_capacity = 0
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_zero_sample_every_rejected() {
        let result = AppConfig::from_toml(
            r#"
            [telemetry]
            sample_every = 0
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_store_config_constructor() {
        let store = StoreConfig::new("warehouse", "namespace");
        assert_eq!(store.os.as_deref(), Some("warehouse"));
        assert_eq!(store.translator_class.as_deref(), Some("namespace"));
    }
}
