//! Configuration types shared across crates.

use crate::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Toml};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix for environment overrides, e.g. `DOCKET_SERVER__BIND=0.0.0.0:8080`.
pub const ENV_PREFIX: &str = "DOCKET_";

/// Server configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

/// Document store configuration.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StoreConfig {
    /// MongoDB document database.
    Mongo {
        /// Connection string.
        #[serde(default = "default_mongo_url")]
        url: String,
        /// Database holding the `owners` and `todos` collections.
        #[serde(default = "default_database")]
        database: String,
        /// Maximum connections in the driver pool.
        #[serde(default)]
        max_pool_size: Option<u32>,
        /// Minimum connections kept open by the driver pool.
        #[serde(default)]
        min_pool_size: Option<u32>,
    },
    /// In-process store. Data is lost when the process exits.
    Memory,
}

fn default_mongo_url() -> String {
    "mongodb://localhost/?directConnection=true".to_string()
}

fn default_database() -> String {
    crate::DEFAULT_DATABASE.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::Mongo {
            url: default_mongo_url(),
            database: default_database(),
            max_pool_size: None,
            min_pool_size: None,
        }
    }
}

impl StoreConfig {
    /// Validate store configuration invariants.
    pub fn validate(&self) -> Result<()> {
        match self {
            StoreConfig::Mongo { url, database, .. } => {
                if url.trim().is_empty() {
                    return Err(Error::InvalidConfig("store url must not be empty".to_string()));
                }
                if database.trim().is_empty() {
                    return Err(Error::InvalidConfig(
                        "store database must not be empty".to_string(),
                    ));
                }
                Ok(())
            }
            StoreConfig::Memory => Ok(()),
        }
    }

    /// Short backend name used in logs and the health endpoint.
    pub fn backend_name(&self) -> &'static str {
        match self {
            StoreConfig::Mongo { .. } => "mongo",
            StoreConfig::Memory => "memory",
        }
    }
}

/// Complete application configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Document store configuration.
    #[serde(default)]
    pub store: StoreConfig,
}

impl AppConfig {
    /// Build the figment for this configuration: an optional TOML file
    /// overridden by `DOCKET_` environment variables.
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::new();
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load and validate configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config: Self = Self::figment(path)
            .extract()
            .map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.store.validate()?;
        Ok(config)
    }

    /// Create a test configuration backed by the in-process store.
    ///
    /// **For testing only.**
    pub fn for_testing() -> Self {
        Self {
            server: ServerConfig {
                bind: "127.0.0.1:0".to_string(),
            },
            store: StoreConfig::Memory,
        }
    }
}
