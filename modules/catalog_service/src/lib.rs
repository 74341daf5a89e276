//! Catalog Service Module
//!
//! Categories and the products that belong to them, stored in a relational
//! database and served read-only over HTTP, with a one-shot demo seeding
//! endpoint.

// Public exports
pub mod contract;
pub use contract::{
    CatalogError, Category, NewCategory, NewProduct, Product, SeedMode, SeedReport,
};

pub mod config;
pub use api::rest::dto::SeedModeDto;
pub use config::Config;

pub mod module;
pub use module::CatalogServiceModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
