//! Route registration

use crate::config::Config;
use crate::domain::Service;
use super::{dto::SeedQuery, encoder::JsonEncoder, error::Problem, handlers};
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::Response,
    routing::get,
    Extension, Router,
};
use std::sync::Arc;

/// Everything the handlers need, shared through a single extension
#[derive(Clone)]
pub struct RestContext {
    pub service: Arc<Service>,
    pub encoder: JsonEncoder,
    pub config: Config,
}

/// Register all REST routes
pub fn register_routes(
    router: Router,
    service: Arc<Service>,
    config: &Config,
) -> anyhow::Result<Router> {
    let ctx = RestContext {
        service,
        encoder: JsonEncoder::new(config.json_indent),
        config: config.clone(),
    };

    let router = router
        .route("/seed", get(seed_handler))
        // Product endpoints
        .route("/products", get(list_products_handler))
        .route("/products/{id}", get(get_product_handler))
        // Category endpoints
        .route("/categories", get(list_categories_handler))
        .route("/categories/{id}", get(get_category_handler))
        .layer(Extension(ctx));

    Ok(router)
}

// ===== Handler wrappers that extract context from Extension =====

async fn seed_handler(
    Extension(ctx): Extension<RestContext>,
    query: Query<SeedQuery>,
) -> Result<(StatusCode, &'static str), Problem> {
    handlers::seed(ctx.service, ctx.config.default_seed_mode.into(), query).await
}

async fn list_products_handler(
    Extension(ctx): Extension<RestContext>,
) -> Result<Response, Problem> {
    handlers::list_products(ctx.service, ctx.encoder).await
}

async fn get_product_handler(
    Extension(ctx): Extension<RestContext>,
    path: Path<String>,
) -> Result<Response, Problem> {
    handlers::get_product(ctx.service, ctx.encoder, path).await
}

async fn list_categories_handler(
    Extension(ctx): Extension<RestContext>,
) -> Result<Response, Problem> {
    handlers::list_categories(ctx.service, ctx.encoder).await
}

async fn get_category_handler(
    Extension(ctx): Extension<RestContext>,
    path: Path<String>,
) -> Result<Response, Problem> {
    handlers::get_category(ctx.service, ctx.encoder, path).await
}
