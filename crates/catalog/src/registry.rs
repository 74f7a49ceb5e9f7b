//! Named warehouse instances.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use warehouse_core::{DomainError, DomainResult};

use crate::warehouse::Warehouse;

/// Name used when a caller asks for "the" warehouse without naming one.
pub const DEFAULT_WAREHOUSE_NAME: &str = "DefaultWarehouse";

/// Factory handing out one shared [`Warehouse`] per distinct name.
///
/// Names are case-sensitive. An instance is created on first request and the
/// same `Arc` is returned for every later request of that name.
#[derive(Debug)]
pub struct WarehouseRegistry {
    default_name: String,
    warehouses: RwLock<HashMap<String, Arc<Warehouse>>>,
}

impl WarehouseRegistry {
    pub fn new() -> Self {
        Self {
            default_name: DEFAULT_WAREHOUSE_NAME.to_string(),
            warehouses: RwLock::new(HashMap::new()),
        }
    }

    /// Registry whose [`WarehouseRegistry::get_default`] resolves to `default_name`.
    pub fn with_default_name(default_name: impl Into<String>) -> DomainResult<Self> {
        let default_name = default_name.into();
        if default_name.is_empty() {
            return Err(DomainError::invalid_argument(
                "default warehouse name cannot be empty",
            ));
        }
        Ok(Self {
            default_name,
            warehouses: RwLock::new(HashMap::new()),
        })
    }

    pub fn default_name(&self) -> &str {
        &self.default_name
    }

    /// The shared warehouse called `name`, created if it does not exist yet.
    pub fn get(&self, name: &str) -> DomainResult<Arc<Warehouse>> {
        if let Some(warehouse) = self.read().get(name) {
            return Ok(Arc::clone(warehouse));
        }

        let warehouse = Warehouse::new(name)?;
        let mut warehouses = self.write();
        let warehouse = warehouses.entry(name.to_string()).or_insert_with(|| {
            tracing::info!(warehouse = %name, "created warehouse");
            Arc::new(warehouse)
        });
        Ok(Arc::clone(warehouse))
    }

    /// The warehouse registered under the default name.
    pub fn get_default(&self) -> DomainResult<Arc<Warehouse>> {
        self.get(&self.default_name)
    }

    /// Names of all warehouses created so far, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<Warehouse>>> {
        self.warehouses.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<Warehouse>>> {
        self.warehouses.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for WarehouseRegistry {
    fn default() -> Self {
        Self::new()
    }
}
