//! Domain service - business logic orchestration

use crate::contract::{CatalogError, Category, Product, SeedMode, SeedReport};
use super::repository::{CategoryRepository, ProductRepository, SchemaMigrator};
use super::seeder::Seeder;
use std::sync::Arc;

/// Domain service for catalog reads, schema setup and seeding
pub struct Service {
    schema: Arc<dyn SchemaMigrator>,
    category_repo: Arc<dyn CategoryRepository>,
    product_repo: Arc<dyn ProductRepository>,
    seeder: Seeder,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        schema: Arc<dyn SchemaMigrator>,
        category_repo: Arc<dyn CategoryRepository>,
        product_repo: Arc<dyn ProductRepository>,
    ) -> Self {
        let seeder = Seeder::new(category_repo.clone(), product_repo.clone());
        Self {
            schema,
            category_repo,
            product_repo,
            seeder,
        }
    }

    // ===== Schema & Seed Operations =====

    /// Create the catalog tables if absent and apply additive changes
    pub async fn ensure_schema(&self) -> Result<(), CatalogError> {
        self.schema.ensure_schema().await.map_err(|e| {
            tracing::error!("Schema migration failed: {:?}", e);
            CatalogError::Migration {
                stage: "catalog schema",
            }
        })
    }

    /// Insert the demo data set
    pub async fn seed(&self, mode: SeedMode) -> Result<SeedReport, CatalogError> {
        self.seeder.seed(mode).await
    }

    // ===== Product Operations =====

    /// List all products with their category embedded
    pub async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.product_repo
            .list_with_category()
            .await
            .map_err(store_failure)
    }

    /// Get a product by identifier; an unparsable identifier matches nothing
    pub async fn get_product(&self, id: &str) -> Result<Product, CatalogError> {
        let Some(key) = parse_key(id) else {
            return Err(CatalogError::not_found("product", id));
        };

        self.product_repo
            .find_by_id(key)
            .await
            .map_err(store_failure)?
            .ok_or_else(|| CatalogError::not_found("product", id))
    }

    // ===== Category Operations =====

    /// List all categories
    pub async fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
        self.category_repo.list_all().await.map_err(store_failure)
    }

    /// Get a category by identifier; an unparsable identifier matches nothing
    pub async fn get_category(&self, id: &str) -> Result<Category, CatalogError> {
        let Some(key) = parse_key(id) else {
            return Err(CatalogError::not_found("category", id));
        };

        self.category_repo
            .find_by_id(key)
            .await
            .map_err(store_failure)?
            .ok_or_else(|| CatalogError::not_found("category", id))
    }
}

fn parse_key(id: &str) -> Option<i32> {
    id.parse().ok()
}

fn store_failure(error: anyhow::Error) -> CatalogError {
    tracing::error!("Store query failed: {:?}", error);
    CatalogError::Store
}

#[cfg(test)]
mod tests {
    use super::parse_key;

    #[test]
    fn parse_key_accepts_only_primary_key_values() {
        assert_eq!(parse_key("1"), Some(1));
        assert_eq!(parse_key("-3"), Some(-3));
        assert_eq!(parse_key("not-a-number"), None);
        assert_eq!(parse_key("1.5"), None);
        assert_eq!(parse_key(""), None);
        assert_eq!(parse_key("99999999999"), None);
    }
}
