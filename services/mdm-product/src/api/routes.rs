//! API 路由

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use errors::{AppError, AppResult};
use serde::Serialize;

use crate::application::{
    CreateProductCommand, GetProductQuery, ListProductsQuery, ServiceHandler,
    UpdateProductCommand,
};

use super::dto::{CreateProductRequest, CreateProductResponse, ProductDto, UpdateProductRequest};

pub fn api_routes(handler: Arc<ServiceHandler>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/products", get(list_products).post(create_product))
        .route("/products/{id}", get(get_product).put(update_product))
        .with_state(handler)
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn list_products(
    State(handler): State<Arc<ServiceHandler>>,
) -> AppResult<Json<Vec<ProductDto>>> {
    let products = handler.list_products(ListProductsQuery::default()).await?;
    Ok(Json(products.iter().map(ProductDto::from).collect()))
}

async fn get_product(
    State(handler): State<Arc<ServiceHandler>>,
    Path(id): Path<String>,
) -> AppResult<Json<ProductDto>> {
    let product = handler.get_product(GetProductQuery { id }).await?;
    Ok(Json(ProductDto::from(&product)))
}

async fn create_product(
    State(handler): State<Arc<ServiceHandler>>,
    Json(req): Json<CreateProductRequest>,
) -> AppResult<impl IntoResponse> {
    let id = handler
        .create_product(CreateProductCommand {
            name: req.name,
            description: req.description,
            price: req.price,
            currency: req.currency,
            sku: req.sku,
            stock_quantity: req.stock_quantity,
        })
        .await?;

    let location = format!("/products/{}", id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(CreateProductResponse {
            id: id.into_string(),
        }),
    ))
}

async fn update_product(
    State(handler): State<Arc<ServiceHandler>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateProductRequest>,
) -> AppResult<Json<bool>> {
    // 路径与请求体的 ID 必须一致，校验在进入核心前完成
    if id != req.id {
        return Err(AppError::validation("ID mismatch"));
    }

    handler
        .update_product(UpdateProductCommand {
            id: req.id,
            name: req.name,
            description: req.description,
            price: req.price,
            currency: req.currency,
            stock_quantity: req.stock_quantity,
        })
        .await?;

    Ok(Json(true))
}
