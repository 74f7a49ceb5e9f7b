//! In-memory product repository.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rust_decimal::Decimal;
use warehouse_core::{DomainError, DomainResult, ProductId};

use crate::category::Category;
use crate::record::ProductRecord;

/// Input for [`Warehouse::add_product`].
///
/// `id` and `price` are optional (a fresh id is generated, price defaults to zero).
/// `category` is optional only so that a missing category is reported as an
/// invalid argument instead of being unrepresentable at the call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub id: Option<ProductId>,
    pub name: String,
    pub category: Option<Category>,
    pub price: Option<Decimal>,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            id: None,
            name: name.into(),
            category: Some(category),
            price: None,
        }
    }

    /// A product without a category (rejected by `add_product`).
    pub fn uncategorized(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            category: None,
            price: None,
        }
    }

    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }
}

/// Named in-memory repository of product records.
///
/// All state sits behind one lock, so a warehouse can be shared via `Arc` and
/// every operation either applies completely or not at all. Queries return
/// owned snapshots ordered by product id.
#[derive(Debug)]
pub struct Warehouse {
    name: String,
    products: RwLock<BTreeMap<ProductId, ProductRecord>>,
}

impl Warehouse {
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::invalid_argument("warehouse name cannot be empty"));
        }
        Ok(Self {
            name,
            products: RwLock::new(BTreeMap::new()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Store a new product and return a snapshot of it.
    ///
    /// Fails when the name is empty, the category is missing, the price is
    /// negative, or a product with the given id already exists (use
    /// [`Warehouse::update_product_price`] for existing products).
    pub fn add_product(&self, new: NewProduct) -> DomainResult<ProductRecord> {
        let NewProduct {
            id,
            name,
            category,
            price,
        } = new;

        if name.is_empty() {
            return Err(self.reject("product name cannot be empty"));
        }
        let Some(category) = category else {
            return Err(self.reject("product category is required"));
        };
        let price = price.unwrap_or(Decimal::ZERO);
        self.ensure_non_negative(price)?;
        let id = id.unwrap_or_else(ProductId::new);

        let mut products = self.write();
        if products.contains_key(&id) {
            return Err(self.reject(format!(
                "product {id} already exists, use update_product_price for updates"
            )));
        }

        let record = ProductRecord::new(id, name, category, price);
        products.insert(id, record.clone());
        tracing::debug!(
            warehouse = %self.name,
            product_id = %id,
            category = %record.category(),
            price = %record.price(),
            "product added"
        );
        Ok(record)
    }

    /// Snapshot of the product with `id`, if stored here.
    pub fn get_product_by_id(&self, id: ProductId) -> Option<ProductRecord> {
        self.read().get(&id).cloned()
    }

    /// Overwrite a stored product's price and mark it changed.
    ///
    /// The changed flag is one-way: repeated updates keep it set.
    pub fn update_product_price(&self, id: ProductId, new_price: Decimal) -> DomainResult<()> {
        self.ensure_non_negative(new_price)?;

        let mut products = self.write();
        let Some(record) = products.get_mut(&id) else {
            return Err(self.reject(format!("product {id} does not exist")));
        };
        let old_price = record.price();
        record.set_price(new_price);
        record.set_changed(true);
        tracing::debug!(
            warehouse = %self.name,
            product_id = %id,
            %old_price,
            %new_price,
            "product price updated"
        );
        Ok(())
    }

    /// All products, ordered by id.
    pub fn get_products(&self) -> Vec<ProductRecord> {
        self.read().values().cloned().collect()
    }

    /// Products in `category` (compared by value), ordered by id.
    pub fn get_products_by(&self, category: &Category) -> Vec<ProductRecord> {
        self.read()
            .values()
            .filter(|p| p.category() == category)
            .cloned()
            .collect()
    }

    /// Every product, partitioned by category.
    ///
    /// Only categories with at least one product appear. Groups are keyed in
    /// category-name order; products within a group are ordered by id.
    pub fn get_products_grouped_by_categories(&self) -> BTreeMap<Category, Vec<ProductRecord>> {
        let mut grouped: BTreeMap<Category, Vec<ProductRecord>> = BTreeMap::new();
        for product in self.read().values() {
            grouped
                .entry(product.category().clone())
                .or_default()
                .push(product.clone());
        }
        grouped
    }

    /// Products whose price changed since creation, ordered by id.
    pub fn get_changed_products(&self) -> Vec<ProductRecord> {
        self.read()
            .values()
            .filter(|p| p.is_changed())
            .cloned()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    fn ensure_non_negative(&self, price: Decimal) -> DomainResult<()> {
        if price < Decimal::ZERO {
            return Err(self.reject(format!("price cannot be negative: {price}")));
        }
        Ok(())
    }

    fn reject(&self, msg: impl Into<String>) -> DomainError {
        let err = DomainError::invalid_argument(msg);
        tracing::warn!(warehouse = %self.name, error = %err, "rejected warehouse operation");
        err
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<ProductId, ProductRecord>> {
        self.products.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<ProductId, ProductRecord>> {
        self.products.write().unwrap_or_else(PoisonError::into_inner)
    }
}
