//! Mapper implementations for converting between DTOs and contract models
//!
//! This module contains all From/Into implementations between REST DTOs and
//! transport-agnostic contract models.

use super::dto::*;
use crate::contract;

// ===== Category conversions =====

impl From<contract::Category> for CategoryDto {
    fn from(category: contract::Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
        }
    }
}

// ===== Product conversions =====

impl From<contract::Product> for ProductDto {
    fn from(product: contract::Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            image: product.image,
            price: product.price,
            category_id: product.category_id,
            category: product.category.map(Into::into),
        }
    }
}

// ===== Seed mode conversions =====

impl From<SeedModeDto> for contract::SeedMode {
    fn from(mode: SeedModeDto) -> Self {
        match mode {
            SeedModeDto::Append => contract::SeedMode::Append,
            SeedModeDto::Guarded => contract::SeedMode::Guarded,
        }
    }
}
