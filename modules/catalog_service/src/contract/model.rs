//! Contract models for catalog service
//!
//! These models are transport-agnostic and shared between the storage,
//! domain and REST layers.
//! NO serde derives - these are pure domain models.

/// A group of products
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Store-assigned identifier
    pub id: i32,
    /// Display name
    pub name: String,
    /// Free-form description
    pub description: String,
}

/// A product for sale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Store-assigned identifier
    pub id: i32,
    /// Display name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Image reference
    pub image: String,
    /// Price, absent on deployments that never set it
    pub price: Option<i32>,
    /// Logical reference to `Category::id` (not enforced by the store)
    pub category_id: i32,
    /// Resolved category, only populated on eager-loading read paths
    pub category: Option<Category>,
}

/// Category values for insertion; the store assigns the identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
}

/// Product values for insertion; the store assigns the identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: Option<i32>,
    pub category_id: i32,
}

/// How the demo data set is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedMode {
    /// Insert every row on every call; products reference categories 1 and 2
    #[default]
    Append,
    /// Insert only rows whose name is not present yet
    Guarded,
}

/// Number of rows written by a seed run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedReport {
    pub categories_inserted: usize,
    pub products_inserted: usize,
}
