//! HTTP request handlers - thin layer that delegates to domain service

use crate::contract::SeedMode;
use crate::domain::Service;
use super::{dto::*, encoder::JsonEncoder, error::{map_domain_error, Problem}};
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::Response,
};
use std::sync::Arc;

// ===== Seed Handler =====

/// Migrate the schema, then insert the demo data set
pub async fn seed(
    service: Arc<Service>,
    default_mode: SeedMode,
    Query(query): Query<SeedQuery>,
) -> Result<(StatusCode, &'static str), Problem> {
    let mode = query.mode.map(Into::into).unwrap_or(default_mode);

    service.ensure_schema().await.map_err(map_domain_error)?;
    service.seed(mode).await.map_err(map_domain_error)?;

    Ok((StatusCode::OK, "Migrations and Seeding of database complete\n"))
}

// ===== Product Handlers =====

/// List all products with their category embedded
pub async fn list_products(
    service: Arc<Service>,
    encoder: JsonEncoder,
) -> Result<Response, Problem> {
    let products = service.list_products().await.map_err(map_domain_error)?;

    let items: Vec<ProductDto> = products.into_iter().map(|p| p.into()).collect();
    Ok(encoder.respond(&items))
}

/// Get a specific product
pub async fn get_product(
    service: Arc<Service>,
    encoder: JsonEncoder,
    Path(id): Path<String>,
) -> Result<Response, Problem> {
    let product = service.get_product(&id).await.map_err(map_domain_error)?;

    Ok(encoder.respond(&ProductDto::from(product)))
}

// ===== Category Handlers =====

/// List all categories
pub async fn list_categories(
    service: Arc<Service>,
    encoder: JsonEncoder,
) -> Result<Response, Problem> {
    let categories = service.list_categories().await.map_err(map_domain_error)?;

    let items: Vec<CategoryDto> = categories.into_iter().map(|c| c.into()).collect();
    Ok(encoder.respond(&items))
}

/// Get a specific category
pub async fn get_category(
    service: Arc<Service>,
    encoder: JsonEncoder,
    Path(id): Path<String>,
) -> Result<Response, Problem> {
    let category = service.get_category(&id).await.map_err(map_domain_error)?;

    Ok(encoder.respond(&CategoryDto::from(category)))
}
