//! Configuration management for the Car Park Finder
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with CPF_ prefix

use std::path::PathBuf;

use config::{builder::DefaultState, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use shared::{DEFAULT_CENTER, DEFAULT_MAP_STYLE, DEFAULT_MARKER_RADIUS_M, DEFAULT_ZOOM};

use crate::repository::ArtifactFormat;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Forecast artifact storage
    pub forecast: ForecastConfig,

    /// Reference dataset override
    #[serde(default)]
    pub reference: ReferenceConfig,

    /// Map presentation
    pub map: MapConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ForecastConfig {
    /// Directory holding one artifact per car park
    pub storage_root: PathBuf,

    /// Encoding of the artifacts
    pub format: ArtifactFormat,

    /// Keep loaded series for the process lifetime
    pub cache_enabled: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ReferenceConfig {
    /// JSON file replacing the built-in car park and capacity tables
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MapConfig {
    pub style: String,
    pub initial_latitude: f64,
    pub initial_longitude: f64,
    pub zoom: f64,
    pub marker_radius: u32,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("CPF_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = Self::defaults(&environment)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (CPF_ prefix)
            .add_source(
                Environment::with_prefix("CPF")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Builder holding only the in-code default values
    fn defaults(environment: &str) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        config::Config::builder()
            .set_default("environment", environment)?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("forecast.storage_root", "./model")?
            .set_default("forecast.format", "csv")?
            .set_default("forecast.cache_enabled", false)?
            .set_default("map.style", DEFAULT_MAP_STYLE)?
            .set_default("map.initial_latitude", DEFAULT_CENTER.latitude)?
            .set_default("map.initial_longitude", DEFAULT_CENTER.longitude)?
            .set_default("map.zoom", DEFAULT_ZOOM)?
            .set_default("map.marker_radius", i64::from(DEFAULT_MARKER_RADIUS_M))
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

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            storage_root: PathBuf::from("./model"),
            format: ArtifactFormat::Csv,
            cache_enabled: false,
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            style: DEFAULT_MAP_STYLE.to_string(),
            initial_latitude: DEFAULT_CENTER.latitude,
            initial_longitude: DEFAULT_CENTER.longitude,
            zoom: DEFAULT_ZOOM,
            marker_radius: DEFAULT_MARKER_RADIUS_M,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            forecast: ForecastConfig::default(),
            reference: ReferenceConfig::default(),
            map: MapConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_code_defaults() {
        let config: Config = Config::defaults("development")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.environment, "development");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.forecast.storage_root, PathBuf::from("./model"));
        assert_eq!(config.forecast.format, ArtifactFormat::Csv);
        assert!(!config.forecast.cache_enabled);
        assert!(config.reference.path.is_none());
        assert_eq!(config.map.zoom, DEFAULT_ZOOM);
        assert_eq!(config.map.marker_radius, 100);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let toml = r#"
            [server]
            host = "127.0.0.1"

            [forecast]
            format = "json"
            cache_enabled = true

            [reference]
            path = "reference.json"
        "#;
        let config: Config = Config::defaults("production")
            .unwrap()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.environment, "production");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.forecast.format, ArtifactFormat::Json);
        assert!(config.forecast.cache_enabled);
        assert_eq!(config.reference.path, Some(PathBuf::from("reference.json")));
        assert_eq!(config.map.style, DEFAULT_MAP_STYLE);
    }
}
