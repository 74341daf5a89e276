//! Demo data seeding
//!
//! The data set is fixed: two categories followed by five products. In
//! [`SeedMode::Append`] products point at category ids 1 and 2 directly,
//! which only holds when the categories table started empty and the store
//! numbers rows from 1 without gaps.

use crate::contract::{
    CatalogError, Category, NewCategory, NewProduct, Product, SeedMode, SeedReport,
};
use super::repository::{CategoryRepository, ProductRepository};
use std::sync::Arc;

/// (name, description)
const CATEGORIES: [(&str, &str); 2] = [
    ("Phone", "Description 1"),
    ("Video Game Console", "Description 2"),
];

/// (name, description, image, expected category id)
const PRODUCTS: [(&str, &str, &str, i32); 5] = [
    ("iPhone", "Description 1", "Image 1", 1),
    ("Pixel Pro", "Description 2", "Image 2", 1),
    ("Playstation", "Description 3", "Image 3", 2),
    ("Xbox", "Description 4", "Image 4", 2),
    ("Galaxy S", "Description 5", "Image 5", 1),
];

/// Writes the demo data set through the repositories
pub struct Seeder {
    category_repo: Arc<dyn CategoryRepository>,
    product_repo: Arc<dyn ProductRepository>,
}

impl Seeder {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        product_repo: Arc<dyn ProductRepository>,
    ) -> Self {
        Self {
            category_repo,
            product_repo,
        }
    }

    /// Insert the demo rows. Stops at the first failed insert; rows written
    /// before it are kept.
    pub async fn seed(&self, mode: SeedMode) -> Result<SeedReport, CatalogError> {
        let mut report = SeedReport::default();

        let mut category_ids = Vec::with_capacity(CATEGORIES.len());
        for (name, description) in CATEGORIES {
            let new = NewCategory {
                name: name.to_string(),
                description: description.to_string(),
            };
            let (category, inserted) = self
                .write_category(&new, mode)
                .await
                .map_err(|e| seed_failure("categories", name, e))?;
            if inserted {
                report.categories_inserted += 1;
            }
            category_ids.push(category.id);
        }

        for (name, description, image, expected_category_id) in PRODUCTS {
            let category_id = match mode {
                SeedMode::Append => expected_category_id,
                // Slot n of CATEGORIES carries expected id n + 1
                SeedMode::Guarded => category_ids
                    .get((expected_category_id - 1) as usize)
                    .copied()
                    .unwrap_or(expected_category_id),
            };
            let new = NewProduct {
                name: name.to_string(),
                description: description.to_string(),
                image: image.to_string(),
                price: None,
                category_id,
            };
            let (_, inserted) = self
                .write_product(&new, mode)
                .await
                .map_err(|e| seed_failure("products", name, e))?;
            if inserted {
                report.products_inserted += 1;
            }
        }

        tracing::info!(
            ?mode,
            categories = report.categories_inserted,
            products = report.products_inserted,
            "Catalog seeding complete"
        );
        Ok(report)
    }

    async fn write_category(
        &self,
        category: &NewCategory,
        mode: SeedMode,
    ) -> anyhow::Result<(Category, bool)> {
        if mode == SeedMode::Guarded {
            if let Some(existing) = self.category_repo.find_by_name(&category.name).await? {
                return Ok((existing, false));
            }
        }
        Ok((self.category_repo.insert(category).await?, true))
    }

    async fn write_product(
        &self,
        product: &NewProduct,
        mode: SeedMode,
    ) -> anyhow::Result<(Product, bool)> {
        if mode == SeedMode::Guarded {
            if let Some(existing) = self.product_repo.find_by_name(&product.name).await? {
                return Ok((existing, false));
            }
        }
        Ok((self.product_repo.insert(product).await?, true))
    }
}

fn seed_failure(stage: &'static str, row: &str, error: anyhow::Error) -> CatalogError {
    tracing::error!(stage, row, "Seed insert failed: {:?}", error);
    CatalogError::Seed { stage }
}
