//! Composition root for the catalog.

use std::sync::Arc;

use warehouse_core::DomainResult;

use crate::category::{Category, CategoryRegistry};
use crate::config::CatalogConfig;
use crate::registry::WarehouseRegistry;
use crate::warehouse::Warehouse;

/// Owns the category and warehouse registries for one application instance.
///
/// Build one per process (or per test) and pass it to whatever front end
/// calls into the catalog.
#[derive(Debug)]
pub struct CatalogContext {
    config: CatalogConfig,
    categories: CategoryRegistry,
    warehouses: WarehouseRegistry,
}

impl CatalogContext {
    pub fn new(config: CatalogConfig) -> DomainResult<Self> {
        let warehouses = WarehouseRegistry::with_default_name(config.default_warehouse.clone())?;
        Ok(Self {
            config,
            categories: CategoryRegistry::new(),
            warehouses,
        })
    }

    pub fn from_env() -> DomainResult<Self> {
        Self::new(CatalogConfig::from_env())
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn categories(&self) -> &CategoryRegistry {
        &self.categories
    }

    pub fn warehouses(&self) -> &WarehouseRegistry {
        &self.warehouses
    }

    /// Shorthand for `categories().of(name)`.
    pub fn category(&self, name: &str) -> DomainResult<Category> {
        self.categories.of(name)
    }

    /// Shorthand for `warehouses().get(name)`.
    pub fn warehouse(&self, name: &str) -> DomainResult<Arc<Warehouse>> {
        self.warehouses.get(name)
    }

    pub fn default_warehouse(&self) -> DomainResult<Arc<Warehouse>> {
        self.warehouses.get_default()
    }
}
