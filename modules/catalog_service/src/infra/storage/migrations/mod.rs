//! Database migrations for catalog service
//!
//! Tables are created without a foreign key between products and
//! categories, so either side may be written first and orphaned product rows
//! are tolerated.

use sea_orm_migration::prelude::*;

mod m20240601_000001_create_categories;
mod m20240601_000002_create_products;
mod m20240601_000003_add_product_price;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_categories::Migration),
            Box::new(m20240601_000002_create_products::Migration),
            Box::new(m20240601_000003_add_product_price::Migration),
        ]
    }
}
