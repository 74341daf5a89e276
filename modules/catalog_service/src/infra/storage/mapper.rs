//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use crate::contract::{Category, NewCategory, NewProduct, Product};
use super::entity;

// ===== Category Conversions =====

impl From<entity::category::Model> for Category {
    fn from(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
        }
    }
}

impl From<&NewCategory> for entity::category::ActiveModel {
    fn from(model: &NewCategory) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: NotSet,
            name: Set(model.name.clone()),
            description: Set(model.description.clone()),
        }
    }
}

// ===== Product Conversions =====

impl From<entity::Model> for Product {
    fn from(entity: entity::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            image: entity.image,
            price: entity.price,
            category_id: entity.category_id,
            category: None,
        }
    }
}

impl From<(entity::Model, Option<entity::category::Model>)> for Product {
    fn from((product, category): (entity::Model, Option<entity::category::Model>)) -> Self {
        Self {
            category: category.map(Into::into),
            ..Product::from(product)
        }
    }
}

impl From<&NewProduct> for entity::ActiveModel {
    fn from(model: &NewProduct) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: NotSet,
            name: Set(model.name.clone()),
            description: Set(model.description.clone()),
            image: Set(model.image.clone()),
            category_id: Set(model.category_id),
            price: Set(model.price),
        }
    }
}
