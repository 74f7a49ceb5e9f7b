//! Product record entity.

use rust_decimal::Decimal;
use serde::Serialize;
use warehouse_core::{Entity, ProductId};

use crate::category::Category;

/// One catalog entry.
///
/// Records are created and mutated only by [`crate::Warehouse`]; callers receive
/// owned snapshots and cannot change a stored price behind the warehouse's back.
/// Two records are equal iff their ids are equal.
#[derive(Debug, Clone, Serialize)]
pub struct ProductRecord {
    id: ProductId,
    name: String,
    category: Category,
    price: Decimal,
    changed: bool,
}

impl ProductRecord {
    /// Build a record from already-validated parts. The record starts unchanged.
    pub(crate) fn new(id: ProductId, name: String, category: Category, price: Decimal) -> Self {
        Self {
            id,
            name,
            category,
            price,
            changed: false,
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Whether the price has been altered since creation.
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub(crate) fn set_price(&mut self, price: Decimal) {
        self.price = price;
    }

    pub(crate) fn set_changed(&mut self, changed: bool) {
        self.changed = changed;
    }
}

impl Entity for ProductRecord {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl PartialEq for ProductRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ProductRecord {}

impl core::hash::Hash for ProductRecord {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl core::fmt::Display for ProductRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "ProductRecord{{id={}, name='{}', category={}, price={}}}",
            self.id, self.name, self.category, self.price
        )
    }
}
