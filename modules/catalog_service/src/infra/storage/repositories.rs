//! SeaORM repository implementations

use crate::contract::{Category, NewCategory, NewProduct, Product};
use crate::domain::repository::{CategoryRepository, ProductRepository, SchemaMigrator};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

use super::entity;
use super::migrations::Migrator;

// ===== Schema =====

pub struct SeaOrmSchemaMigrator {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmSchemaMigrator {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SchemaMigrator for SeaOrmSchemaMigrator {
    async fn ensure_schema(&self) -> Result<()> {
        Migrator::up(&*self.db, None).await?;
        tracing::debug!("Catalog migrations are up to date");
        Ok(())
    }
}

// ===== Category Repository =====

pub struct SeaOrmCategoryRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmCategoryRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for SeaOrmCategoryRepository {
    async fn insert(&self, category: &NewCategory) -> Result<Category> {
        let active: entity::category::ActiveModel = category.into();

        let result = entity::category::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Category>> {
        let result = entity::category::Entity::find_by_id(id)
            .one(&*self.db)
            .await?;

        Ok(result.map(|e| e.into()))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Category>> {
        let result = entity::category::Entity::find()
            .filter(entity::category::Column::Name.eq(name))
            .order_by_asc(entity::category::Column::Id)
            .one(&*self.db)
            .await?;

        Ok(result.map(|e| e.into()))
    }

    async fn list_all(&self) -> Result<Vec<Category>> {
        let results = entity::category::Entity::find()
            .order_by_asc(entity::category::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }
}

// ===== Product Repository =====

pub struct SeaOrmProductRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmProductRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn insert(&self, product: &NewProduct) -> Result<Product> {
        let active: entity::ActiveModel = product.into();

        let result = entity::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>> {
        let result = entity::Entity::find_by_id(id).one(&*self.db).await?;

        Ok(result.map(|e| e.into()))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Product>> {
        let result = entity::Entity::find()
            .filter(entity::Column::Name.eq(name))
            .order_by_asc(entity::Column::Id)
            .one(&*self.db)
            .await?;

        Ok(result.map(|e| e.into()))
    }

    async fn list_with_category(&self) -> Result<Vec<Product>> {
        // Single LEFT JOIN over the declared relation
        let results = entity::Entity::find()
            .find_also_related(entity::category::Entity)
            .order_by_asc(entity::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }
}
