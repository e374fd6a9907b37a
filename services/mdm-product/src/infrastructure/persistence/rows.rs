//! 行类型与聚合转换

use chrono::{DateTime, Utc};
use errors::{AppError, AppResult};
use rust_decimal::Decimal;

use crate::domain::entities::Product;
use crate::domain::value_objects::{Price, ProductId, Sku};

/// products 表行
#[derive(Debug, sqlx::FromRow)]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price_amount: Decimal,
    pub price_currency: String,
    pub sku: String,
    pub stock_quantity: i32,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// 行 -> 聚合
///
/// 入库数据都经过领域校验；这里校验失败意味着记录已被破坏。
/// is_available 由库存重新推导，不使用存储列。
pub fn product_from_row(row: ProductRow) -> AppResult<Product> {
    let id = ProductId::new(row.id)
        .map_err(|e| AppError::internal(format!("产品记录无效: {}", e)))?;
    let sku = Sku::new(row.sku)
        .map_err(|e| AppError::internal(format!("产品记录无效: {}", e)))?;
    let price = Price::new(row.price_amount, row.price_currency)
        .map_err(|e| AppError::internal(format!("产品记录无效: {}", e)))?;

    Ok(Product::from_parts(
        id,
        row.name,
        row.description,
        price,
        sku,
        row.stock_quantity,
        row.created_at,
        row.updated_at,
    ))
}
