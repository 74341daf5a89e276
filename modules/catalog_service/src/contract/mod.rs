//! Contract layer - public models and error kinds
//!
//! This layer contains transport-agnostic models shared by every other layer.
//! NO serde derives on models - these are pure domain types.

pub mod error;
pub mod model;

pub use error::CatalogError;
pub use model::{Category, NewCategory, NewProduct, Product, SeedMode, SeedReport};
