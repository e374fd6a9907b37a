//! API 数据传输对象
//!
//! 聚合到外部读模型的映射是纯投影，由 API 边界持有，不属于核心。

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entities::Product;

/// 产品读模型
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub currency: String,
    pub sku: String,
    pub stock_quantity: i32,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&Product> for ProductDto {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().as_str().to_string(),
            name: product.name().to_string(),
            description: product.description().to_string(),
            price: product.price().amount(),
            currency: product.price().currency().to_string(),
            sku: product.sku().as_str().to_string(),
            stock_quantity: product.stock_quantity(),
            is_available: product.is_available(),
            created_at: product.created_at(),
            updated_at: product.updated_at(),
        }
    }
}

/// 未指定时的默认货币
fn default_currency() -> String {
    "USD".to_string()
}

/// 创建产品请求
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub sku: String,
    pub stock_quantity: i32,
}

/// 更新产品请求
///
/// 请求体中携带 ID，路径与请求体的 ID 必须一致。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub stock_quantity: Option<i32>,
}

/// 创建产品响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProductResponse {
    pub id: String,
}
