//! 产品领域事件

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::{Price, ProductId, Sku};

/// 事件基础信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMetadata {
    /// 事件 ID
    pub event_id: Uuid,
    /// 事件发生时间
    pub occurred_at: DateTime<Utc>,
}

impl EventMetadata {
    pub fn new() -> Self {
        Self {
            event_id: Uuid::now_v7(),
            occurred_at: Utc::now(),
        }
    }
}

impl Default for EventMetadata {
    fn default() -> Self {
        Self::new()
    }
}

/// 产品领域事件
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ProductEvent {
    /// 产品已创建
    Created(ProductCreated),
}

impl ProductEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            ProductEvent::Created(_) => "mdm.product.created",
        }
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            ProductEvent::Created(e) => e.metadata.occurred_at,
        }
    }
}

/// 产品已创建事件
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreated {
    pub metadata: EventMetadata,
    pub product_id: ProductId,
    pub name: String,
    pub sku: Sku,
    pub price: Price,
    pub stock_quantity: i32,
}

impl ProductCreated {
    pub fn new(
        product_id: ProductId,
        name: String,
        sku: Sku,
        price: Price,
        stock_quantity: i32,
    ) -> Self {
        Self {
            metadata: EventMetadata::new(),
            product_id,
            name,
            sku,
            price,
            stock_quantity,
        }
    }
}
