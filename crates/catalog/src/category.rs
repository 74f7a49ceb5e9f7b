//! Product categories and their canonicalizing registry.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Serialize, Serializer};
use warehouse_core::{DomainError, DomainResult, ValueObject};

/// Canonical product category.
///
/// Obtained only through [`CategoryRegistry::of`], which capitalizes the first
/// character of the name and hands back the same shared value for every request
/// of that normalized name. Equality, ordering and hashing use the name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Category {
    name: Arc<str>,
}

impl Category {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True when both values come from the same registry entry.
    pub fn ptr_eq(&self, other: &Category) -> bool {
        Arc::ptr_eq(&self.name, &other.name)
    }
}

impl ValueObject for Category {}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

/// Upper-cases the first character, leaves the rest untouched.
fn normalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Registry of canonical categories, keyed by normalized name.
///
/// Owned by the composition root ([`crate::CatalogContext`]) rather than living
/// in a global, so each test can start from an empty registry.
#[derive(Debug, Default)]
pub struct CategoryRegistry {
    categories: RwLock<HashMap<String, Category>>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the canonical category for `name`, creating it on first use.
    pub fn of(&self, name: &str) -> DomainResult<Category> {
        if name.is_empty() {
            tracing::warn!("rejected empty category name");
            return Err(DomainError::invalid_argument("category name cannot be empty"));
        }

        let normalized = normalize(name);
        if let Some(category) = self.read().get(&normalized) {
            return Ok(category.clone());
        }

        // Another caller may have inserted between the read and write locks;
        // `entry` keeps whichever value got there first.
        let mut categories = self.write();
        let category = categories
            .entry(normalized)
            .or_insert_with_key(|key| {
                tracing::debug!(category = %key, "registered category");
                Category {
                    name: Arc::from(key.as_str()),
                }
            })
            .clone();
        Ok(category)
    }

    /// Whether a category for `name` (after normalization) has been registered.
    pub fn contains(&self, name: &str) -> bool {
        self.read().contains_key(&normalize(name))
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// All registered categories, ordered by name.
    pub fn categories(&self) -> Vec<Category> {
        let mut all: Vec<Category> = self.read().values().cloned().collect();
        all.sort();
        all
    }

    /// Forget every registered category.
    ///
    /// Values handed out earlier stay valid and still compare equal by name to
    /// the ones created afterwards, but are no longer `ptr_eq` to them.
    pub fn clear(&self) {
        self.write().clear();
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Category>> {
        self.categories.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Category>> {
        self.categories.write().unwrap_or_else(PoisonError::into_inner)
    }
}
