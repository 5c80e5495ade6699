//! Configuration and logging setup for applications embedding the catalog.
//!
//! Settings are layered: built-in defaults, then an optional YAML file, then
//! `CATALOG_*` environment variables (a `.env` file is honoured).

use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use thiserror::Error;

/// Default `env_logger` filter directive.
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration path is not valid UTF-8")]
    InvalidPath,
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Catalog settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogConfig {
    /// Filter directive passed to `env_logger`, e.g. `info` or
    /// `catalog_category=debug`.
    pub log_level: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl CatalogConfig {
    /// Loads settings from an optional YAML file and the environment.
    ///
    /// A missing file is not an error; defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut builder = Config::builder().set_default("log_level", DEFAULT_LOG_LEVEL)?;
        if let Some(path) = path {
            let path = path.to_str().ok_or(ConfigError::InvalidPath)?;
            builder = builder.add_source(File::new(path, FileFormat::Yaml).required(false));
        }

        let settings = builder
            .add_source(Environment::with_prefix("CATALOG"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}

/// Installs `env_logger` with the configured filter.
///
/// Returns `false` when a logger was already installed.
pub fn init_logging(config: &CatalogConfig) -> bool {
    env_logger::Builder::new()
        .parse_filters(&config.log_level)
        .try_init()
        .is_ok()
}
