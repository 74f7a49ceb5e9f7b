//! Environment-driven catalog settings.

use serde::{Deserialize, Serialize};

use crate::registry::DEFAULT_WAREHOUSE_NAME;

/// Environment variable naming the default warehouse.
pub const DEFAULT_WAREHOUSE_ENV: &str = "WAREHOUSE_DEFAULT_NAME";

/// Environment variable holding the tracing filter directive.
pub const LOG_FILTER_ENV: &str = "RUST_LOG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Name resolved by [`crate::WarehouseRegistry::get_default`].
    pub default_warehouse: String,
    /// Default `tracing` filter when none is set in the environment.
    pub log_filter: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_warehouse: DEFAULT_WAREHOUSE_NAME.to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Read settings from the process environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`CatalogConfig::from_env`] but with a caller-supplied lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let default_warehouse = match lookup(DEFAULT_WAREHOUSE_ENV) {
            Some(name) if !name.trim().is_empty() => name,
            Some(_) => {
                tracing::warn!(
                    "{} is empty; using {}",
                    DEFAULT_WAREHOUSE_ENV,
                    defaults.default_warehouse
                );
                defaults.default_warehouse
            }
            None => defaults.default_warehouse,
        };

        let log_filter = lookup(LOG_FILTER_ENV)
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or(defaults.log_filter);

        Self {
            default_warehouse,
            log_filter,
        }
    }
}
