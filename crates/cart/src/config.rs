//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `POCKETMARKET_CART_NAMESPACE` - storage key namespace (default: `PocketMarket`)
//! - `POCKETMARKET_DATA_DIR` - directory for the file storage backend (default: `data`)

use std::path::PathBuf;

use thiserror::Error;

/// Suffix of the single key the cart is persisted under.
const PRODUCTS_KEY: &str = "Products";

/// Default storage key namespace.
const DEFAULT_NAMESPACE: &str = "PocketMarket";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart storage configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Namespace prefixed to the storage key, so several apps can share one
    /// key-value store without colliding.
    pub namespace: String,
    /// Directory the file backend keeps its keys under.
    pub data_dir: PathBuf,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            data_dir: PathBuf::from("data"),
        }
    }
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    /// Every variable has a default, so loading only fails on values that
    /// are present but unusable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configured namespace is empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let namespace = get_env_or_default("POCKETMARKET_CART_NAMESPACE", DEFAULT_NAMESPACE);
        if namespace.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "POCKETMARKET_CART_NAMESPACE".to_string(),
                "namespace cannot be empty".to_string(),
            ));
        }

        let data_dir = PathBuf::from(get_env_or_default("POCKETMARKET_DATA_DIR", "data"));

        Ok(Self {
            namespace,
            data_dir,
        })
    }

    /// The single key the whole cart is serialized under,
    /// e.g. `PocketMarket:Products`.
    #[must_use]
    pub fn products_key(&self) -> String {
        format!("{}:{PRODUCTS_KEY}", self.namespace)
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
