//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};

// ===== Category DTOs =====

/// Category response DTO
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
    pub description: String,
}

// ===== Product DTOs =====

/// Product response DTO
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub image: String,

    /// Omitted when the row has no price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i32>,

    pub category_id: i32,

    /// Present on list responses; omitted when not resolved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryDto>,
}

// ===== Seed DTOs =====

/// Seed mode query value
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SeedModeDto {
    Append,
    Guarded,
}

/// Query parameters for `GET /seed`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedQuery {
    /// Falls back to the configured default when absent
    #[serde(default)]
    pub mode: Option<SeedModeDto>,
}

// Note: Conversion implementations live in mapper.rs
