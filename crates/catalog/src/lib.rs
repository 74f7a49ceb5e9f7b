//! Catalog domain module: categories, product records, and in-memory warehouses.
//!
//! Everything here is deterministic domain logic held in process memory (no IO,
//! no persistence). Presentation and storage layers call into [`Warehouse`] and
//! render its snapshots however they like.

pub mod category;
pub mod config;
pub mod context;
pub mod record;
pub mod registry;
pub mod warehouse;

pub use category::{Category, CategoryRegistry};
pub use config::CatalogConfig;
pub use context::CatalogContext;
pub use record::ProductRecord;
pub use registry::{DEFAULT_WAREHOUSE_NAME, WarehouseRegistry};
pub use warehouse::{NewProduct, Warehouse};

pub use rust_decimal::Decimal;
pub use warehouse_core::{DomainError, DomainResult, ProductId};
