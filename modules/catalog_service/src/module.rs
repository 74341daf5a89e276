//! Module declaration and lifecycle implementation

use crate::config::Config;
use crate::domain::Service;
use crate::infra::storage::repositories::{
    SeaOrmCategoryRepository, SeaOrmProductRepository, SeaOrmSchemaMigrator,
};
use anyhow::Result;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Catalog service module
///
/// Built around an already-connected store handle; it never opens or closes
/// the connection itself.
pub struct CatalogServiceModule {
    config: Config,
    service: Arc<Service>,
}

impl CatalogServiceModule {
    /// Wire repositories and the domain service onto `db`
    pub fn new(db: Arc<DatabaseConnection>, config: Config) -> Self {
        // Build repositories
        let schema = Arc::new(SeaOrmSchemaMigrator::new(db.clone()));
        let category_repo = Arc::new(SeaOrmCategoryRepository::new(db.clone()));
        let product_repo = Arc::new(SeaOrmProductRepository::new(db));

        // Build domain service
        let service = Arc::new(Service::new(schema, category_repo, product_repo));

        tracing::info!("Catalog service initialized");
        Self { config, service }
    }

    /// Domain service shared by every route
    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// Apply migrations when `migrate_on_start` is set
    pub async fn init(&self) -> Result<()> {
        if self.config.migrate_on_start {
            self.service.ensure_schema().await?;
            tracing::info!("Catalog service migrations completed");
        }
        Ok(())
    }

    /// Register the REST routes onto `router`
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        tracing::info!("Registering catalog service REST routes");
        crate::api::rest::routes::register_routes(router, self.service.clone(), &self.config)
    }
}
