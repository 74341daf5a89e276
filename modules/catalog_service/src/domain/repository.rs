//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{Category, NewCategory, NewProduct, Product};
use anyhow::Result;
use async_trait::async_trait;

/// Creates or upgrades the catalog tables
#[async_trait]
pub trait SchemaMigrator: Send + Sync {
    /// Apply pending migrations; a no-op when the schema is current
    async fn ensure_schema(&self) -> Result<()>;
}

/// Repository for categories
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Insert a category and return it with its assigned identifier
    async fn insert(&self, category: &NewCategory) -> Result<Category>;

    /// Find a category by identifier
    async fn find_by_id(&self, id: i32) -> Result<Option<Category>>;

    /// Find the first category with the given name
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>>;

    /// List all categories in identifier order
    async fn list_all(&self) -> Result<Vec<Category>>;
}

/// Repository for products
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product and return it with its assigned identifier
    async fn insert(&self, product: &NewProduct) -> Result<Product>;

    /// Find a product by identifier, without resolving its category
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>>;

    /// Find the first product with the given name
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>>;

    /// List all products in identifier order with their categories resolved
    async fn list_with_category(&self) -> Result<Vec<Product>>;
}
