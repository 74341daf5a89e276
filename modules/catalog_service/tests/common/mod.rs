//! Common test utilities backed by in-memory SQLite

#![allow(dead_code)]

use catalog_service::domain::Service;
use catalog_service::infra::storage::repositories::{
    SeaOrmCategoryRepository, SeaOrmProductRepository, SeaOrmSchemaMigrator,
};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;

/// Fresh in-memory database; a single pooled connection keeps every query
/// on the same SQLite memory instance
pub async fn memory_db() -> Arc<DatabaseConnection> {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    Arc::new(Database::connect(opts).await.unwrap())
}

/// Domain service wired onto SeaORM repositories
pub fn sea_orm_service(db: Arc<DatabaseConnection>) -> Service {
    Service::new(
        Arc::new(SeaOrmSchemaMigrator::new(db.clone())),
        Arc::new(SeaOrmCategoryRepository::new(db.clone())),
        Arc::new(SeaOrmProductRepository::new(db)),
    )
}

/// Migrated, empty catalog
pub async fn migrated_service() -> (Arc<DatabaseConnection>, Service) {
    let db = memory_db().await;
    let service = sea_orm_service(db.clone());
    service.ensure_schema().await.unwrap();
    (db, service)
}

/// Expected (product name, category name) pairs of one seed run
pub const SEEDED_PRODUCTS: [(&str, &str); 5] = [
    ("iPhone", "Phone"),
    ("Pixel Pro", "Phone"),
    ("Playstation", "Video Game Console"),
    ("Xbox", "Video Game Console"),
    ("Galaxy S", "Phone"),
];
