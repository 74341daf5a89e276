//! Service tests against mock repositories
//!
//! These cover error translation and seeding order without a real store.

use catalog_service::contract::*;
use catalog_service::domain::repository::{
    CategoryRepository, ProductRepository, SchemaMigrator,
};
use catalog_service::domain::Service;
use std::sync::Arc;

// Mock repository implementations for testing
pub mod mocks {
    use super::*;
    use async_trait::async_trait;
    use parking_lot::RwLock;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    pub struct MockSchema {
        pub fail: bool,
        pub calls: AtomicUsize,
    }

    #[async_trait]
    impl SchemaMigrator for MockSchema {
        async fn ensure_schema(&self) -> anyhow::Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                anyhow::bail!("ALTER TABLE rejected: incompatible column type");
            }
            Ok(())
        }
    }

    /// Category rows plus an optional failure switch for every call
    #[derive(Default)]
    pub struct MockCategoryRepo {
        pub rows: RwLock<Vec<Category>>,
        pub fail: bool,
        pub lookups: AtomicUsize,
    }

    #[async_trait]
    impl CategoryRepository for MockCategoryRepo {
        async fn insert(&self, category: &NewCategory) -> anyhow::Result<Category> {
            if self.fail {
                anyhow::bail!("connection refused");
            }
            let mut rows = self.rows.write();
            let row = Category {
                id: rows.len() as i32 + 1,
                name: category.name.clone(),
                description: category.description.clone(),
            };
            rows.push(row.clone());
            Ok(row)
        }

        async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Category>> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                anyhow::bail!("connection refused");
            }
            Ok(self.rows.read().iter().find(|c| c.id == id).cloned())
        }

        async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Category>> {
            Ok(self.rows.read().iter().find(|c| c.name == name).cloned())
        }

        async fn list_all(&self) -> anyhow::Result<Vec<Category>> {
            if self.fail {
                anyhow::bail!("connection refused");
            }
            Ok(self.rows.read().clone())
        }
    }

    /// Product rows; inserts start failing once `fail_after` rows exist
    #[derive(Default)]
    pub struct MockProductRepo {
        pub rows: RwLock<Vec<Product>>,
        pub fail_after: Option<usize>,
        pub fail_reads: bool,
        pub lookups: AtomicUsize,
    }

    #[async_trait]
    impl ProductRepository for MockProductRepo {
        async fn insert(&self, product: &NewProduct) -> anyhow::Result<Product> {
            let mut rows = self.rows.write();
            if self.fail_after.is_some_and(|limit| rows.len() >= limit) {
                anyhow::bail!("driver: server has gone away");
            }
            let row = Product {
                id: rows.len() as i32 + 1,
                name: product.name.clone(),
                description: product.description.clone(),
                image: product.image.clone(),
                price: product.price,
                category_id: product.category_id,
                category: None,
            };
            rows.push(row.clone());
            Ok(row)
        }

        async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Product>> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            if self.fail_reads {
                anyhow::bail!("connection refused");
            }
            Ok(self.rows.read().iter().find(|p| p.id == id).cloned())
        }

        async fn find_by_name(&self, name: &str) -> anyhow::Result<Option<Product>> {
            Ok(self.rows.read().iter().find(|p| p.name == name).cloned())
        }

        async fn list_with_category(&self) -> anyhow::Result<Vec<Product>> {
            if self.fail_reads {
                anyhow::bail!("connection refused");
            }
            Ok(self.rows.read().clone())
        }
    }
}

use mocks::*;
use std::sync::atomic::Ordering;

fn service_with(
    schema: MockSchema,
    categories: Arc<MockCategoryRepo>,
    products: Arc<MockProductRepo>,
) -> Service {
    Service::new(Arc::new(schema), categories, products)
}

#[tokio::test]
async fn migration_failure_is_reported_as_migration_error() {
    let service = service_with(
        MockSchema {
            fail: true,
            ..Default::default()
        },
        Arc::default(),
        Arc::default(),
    );

    let err = service.ensure_schema().await.unwrap_err();
    assert_eq!(err, CatalogError::Migration { stage: "catalog schema" });
    assert!(!err.to_string().contains("incompatible"));
}

#[tokio::test]
async fn seed_inserts_categories_before_products() {
    let categories = Arc::new(MockCategoryRepo::default());
    let products = Arc::new(MockProductRepo::default());
    let service = service_with(MockSchema::default(), categories.clone(), products.clone());

    service.seed(SeedMode::Append).await.unwrap();

    let names: Vec<String> = categories.rows.read().iter().map(|c| c.name.clone()).collect();
    assert_eq!(names, ["Phone", "Video Game Console"]);

    let refs: Vec<(String, i32)> = products
        .rows
        .read()
        .iter()
        .map(|p| (p.name.clone(), p.category_id))
        .collect();
    assert_eq!(
        refs,
        [
            ("iPhone".to_string(), 1),
            ("Pixel Pro".to_string(), 1),
            ("Playstation".to_string(), 2),
            ("Xbox".to_string(), 2),
            ("Galaxy S".to_string(), 1),
        ]
    );
}

#[tokio::test]
async fn append_seed_uses_expected_ids_even_when_categories_exist() {
    let categories = Arc::new(MockCategoryRepo::default());
    let products = Arc::new(MockProductRepo::default());
    let service = service_with(MockSchema::default(), categories.clone(), products.clone());

    service.seed(SeedMode::Append).await.unwrap();
    service.seed(SeedMode::Append).await.unwrap();

    assert_eq!(categories.rows.read().len(), 4);
    let rows = products.rows.read();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[5].name, "iPhone");
    assert_eq!(rows[5].category_id, 1);
    assert_eq!(rows[7].category_id, 2);
}

#[tokio::test]
async fn guarded_seed_references_resolved_categories() {
    let categories = Arc::new(MockCategoryRepo::default());
    // An unrelated row shifts the ids the seeder will get
    categories.rows.write().push(Category {
        id: 1,
        name: "Laptop".to_string(),
        description: "Pre-existing".to_string(),
    });
    let products = Arc::new(MockProductRepo::default());
    let service = service_with(MockSchema::default(), categories.clone(), products.clone());

    service.seed(SeedMode::Guarded).await.unwrap();

    let rows = products.rows.read();
    assert_eq!(rows[0].name, "iPhone");
    assert_eq!(rows[0].category_id, 2);
    assert_eq!(rows[2].name, "Playstation");
    assert_eq!(rows[2].category_id, 3);
}

#[tokio::test]
async fn failed_product_insert_keeps_earlier_rows() {
    let categories = Arc::new(MockCategoryRepo::default());
    let products = Arc::new(MockProductRepo {
        fail_after: Some(3),
        ..Default::default()
    });
    let service = service_with(MockSchema::default(), categories.clone(), products.clone());

    let err = service.seed(SeedMode::Append).await.unwrap_err();

    assert_eq!(err, CatalogError::Seed { stage: "products" });
    assert_eq!(err.to_string(), "failed to seed products");
    assert_eq!(categories.rows.read().len(), 2);
    assert_eq!(products.rows.read().len(), 3);
}

#[tokio::test]
async fn failed_category_insert_stops_before_products() {
    let categories = Arc::new(MockCategoryRepo {
        fail: true,
        ..Default::default()
    });
    let products = Arc::new(MockProductRepo::default());
    let service = service_with(MockSchema::default(), categories, products.clone());

    let err = service.seed(SeedMode::Append).await.unwrap_err();

    assert_eq!(err, CatalogError::Seed { stage: "categories" });
    assert!(products.rows.read().is_empty());
}

#[tokio::test]
async fn read_failures_become_store_errors() {
    let categories = Arc::new(MockCategoryRepo {
        fail: true,
        ..Default::default()
    });
    let products = Arc::new(MockProductRepo {
        fail_reads: true,
        ..Default::default()
    });
    let service = service_with(MockSchema::default(), categories, products);

    assert_eq!(service.list_products().await, Err(CatalogError::Store));
    assert_eq!(service.list_categories().await, Err(CatalogError::Store));
    assert_eq!(service.get_product("1").await, Err(CatalogError::Store));
    assert_eq!(service.get_category("1").await, Err(CatalogError::Store));
}

#[tokio::test]
async fn unparsable_ids_never_reach_the_repository() {
    let categories = Arc::new(MockCategoryRepo::default());
    let products = Arc::new(MockProductRepo {
        fail_reads: true,
        ..Default::default()
    });
    let service = service_with(MockSchema::default(), categories.clone(), products.clone());

    let err = service.get_product("not-a-number").await.unwrap_err();
    assert_eq!(
        err,
        CatalogError::NotFound {
            resource: "product",
            id: "not-a-number".to_string()
        }
    );
    assert!(matches!(
        service.get_category("abc").await,
        Err(CatalogError::NotFound { .. })
    ));

    assert_eq!(products.lookups.load(Ordering::SeqCst), 0);
    assert_eq!(categories.lookups.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn missing_rows_are_not_found() {
    let service = service_with(MockSchema::default(), Arc::default(), Arc::default());

    assert!(matches!(
        service.get_product("999").await,
        Err(CatalogError::NotFound { resource: "product", .. })
    ));
    assert!(matches!(
        service.get_category("999").await,
        Err(CatalogError::NotFound { resource: "category", .. })
    ));
    assert!(service.list_products().await.unwrap().is_empty());
}
