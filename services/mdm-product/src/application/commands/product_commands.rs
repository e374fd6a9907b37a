//! 产品命令
//!
//! 命令是纯数据载体，所有校验由值对象和聚合在构造入口完成，
//! 保证失败顺序与领域规则一致。

use rust_decimal::Decimal;

/// 创建产品命令
#[derive(Debug, Clone)]
pub struct CreateProductCommand {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub currency: String,
    pub sku: String,
    pub stock_quantity: i32,
}

/// 更新产品命令
#[derive(Debug, Clone)]
pub struct UpdateProductCommand {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub currency: String,
    /// 提供时同时更新库存
    pub stock_quantity: Option<i32>,
}
