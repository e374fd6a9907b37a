//! 产品聚合根

use chrono::{DateTime, Utc};
use domain_core::{AggregateRoot, Entity};
use thiserror::Error;

use crate::domain::events::{ProductCreated, ProductEvent};
use crate::domain::value_objects::{Price, ProductId, Sku};

/// 产品聚合错误
#[derive(Debug, Error)]
pub enum ProductError {
    #[error("产品名称不能为空")]
    InvalidName,
    #[error("库存数量不能为负数")]
    InvalidStock,
}

/// 产品聚合根
///
/// 产品目录的一致性边界。所有不变量在构造和变更入口处强制校验，
/// 校验失败不产生任何可见的部分状态。
///
/// 不变量:
/// - 名称去除首尾空白后不能为空
/// - 库存数量不能为负
/// - is_available 始终由 `stock_quantity > 0` 推导，不可单独设置
/// - created_at 构造后不再变化；updated_at 仅在变更时向前推进
#[derive(Debug, Clone)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: Price,
    sku: Sku,
    stock_quantity: i32,
    is_available: bool,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,

    /// 待发布领域事件，由事务边界在持久化成功后取出
    pending_events: Vec<ProductEvent>,
}

impl Product {
    /// 创建新产品
    ///
    /// 成功时排队一条 `ProductEvent::Created` 事件。
    pub fn create(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Price,
        sku: Sku,
        stock_quantity: i32,
    ) -> Result<Self, ProductError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(ProductError::InvalidName);
        }

        if stock_quantity < 0 {
            return Err(ProductError::InvalidStock);
        }

        let event = ProductEvent::Created(ProductCreated::new(
            id.clone(),
            name.clone(),
            sku.clone(),
            price.clone(),
            stock_quantity,
        ));

        Ok(Self {
            id,
            name,
            description: description.into(),
            price,
            sku,
            stock_quantity,
            is_available: stock_quantity > 0,
            created_at: Utc::now(),
            updated_at: None,
            pending_events: vec![event],
        })
    }

    /// 从持久化数据重建产品（用于从数据库加载）
    ///
    /// 时间戳直接取自存储值，不排队任何事件。
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: ProductId,
        name: String,
        description: String,
        price: Price,
        sku: Sku,
        stock_quantity: i32,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            sku,
            stock_quantity,
            is_available: stock_quantity > 0,
            created_at,
            updated_at,
            pending_events: Vec::new(),
        }
    }

    // ========== Getters ==========

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> &Price {
        &self.price
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn stock_quantity(&self) -> i32 {
        self.stock_quantity
    }

    pub fn is_available(&self) -> bool {
        self.is_available
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    // ========== 状态变更 ==========

    /// 更新名称、描述和价格
    ///
    /// 描述和价格无条件替换，不影响库存。
    pub fn update_details(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Price,
    ) -> Result<(), ProductError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(ProductError::InvalidName);
        }

        self.name = name;
        self.description = description.into();
        self.price = price;
        self.updated_at = Some(Utc::now());
        Ok(())
    }

    /// 更新库存数量
    pub fn update_stock(&mut self, quantity: i32) -> Result<(), ProductError> {
        if quantity < 0 {
            return Err(ProductError::InvalidStock);
        }

        self.stock_quantity = quantity;
        self.is_available = quantity > 0;
        self.updated_at = Some(Utc::now());
        Ok(())
    }

    // ========== 领域事件 ==========

    /// 取出待发布事件
    pub fn take_events(&mut self) -> Vec<ProductEvent> {
        std::mem::take(&mut self.pending_events)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for Product {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn test_price() -> Price {
        Price::new("9.99".parse().unwrap(), "USD").unwrap()
    }

    fn test_sku() -> Sku {
        Sku::new("ABC-123").unwrap()
    }

    fn test_product(stock: i32) -> Product {
        Product::create(
            ProductId::generate(),
            "Widget",
            "A widget",
            test_price(),
            test_sku(),
            stock,
        )
        .unwrap()
    }

    #[test]
    fn test_create_keeps_input_values() {
        let id = ProductId::generate();
        let product = Product::create(
            id.clone(),
            "Widget",
            "A widget",
            test_price(),
            test_sku(),
            5,
        )
        .unwrap();

        assert_eq!(product.id(), &id);
        assert_eq!(product.name(), "Widget");
        assert_eq!(product.description(), "A widget");
        assert_eq!(product.price(), &test_price());
        assert_eq!(product.sku().as_str(), "ABC-123");
        assert_eq!(product.stock_quantity(), 5);
    }

    #[test]
    fn test_create_derives_availability() {
        assert!(test_product(5).is_available());
        assert!(!test_product(0).is_available());
    }

    #[test]
    fn test_create_stamps_created_at_only() {
        let product = test_product(5);
        assert!(product.updated_at().is_none());
    }

    #[test]
    fn test_create_rejects_empty_name() {
        let result = Product::create(
            ProductId::generate(),
            "   ",
            "",
            test_price(),
            test_sku(),
            5,
        );
        assert!(matches!(result, Err(ProductError::InvalidName)));
    }

    #[test]
    fn test_create_rejects_negative_stock() {
        let result = Product::create(
            ProductId::generate(),
            "Widget",
            "",
            test_price(),
            test_sku(),
            -1,
        );
        assert!(matches!(result, Err(ProductError::InvalidStock)));
    }

    #[test]
    fn test_create_queues_single_created_event() {
        let mut product = test_product(5);
        let events = product.take_events();
        assert_eq!(events.len(), 1);
        match &events[0] {
            ProductEvent::Created(e) => {
                assert_eq!(&e.product_id, product.id());
                assert_eq!(e.name, "Widget");
                assert_eq!(e.stock_quantity, 5);
            }
        }

        // 再次取出为空：事件只发布一次
        assert!(product.take_events().is_empty());
    }

    #[test]
    fn test_update_details_replaces_fields() {
        let mut product = test_product(5);
        let new_price = Price::new("19.99".parse::<Decimal>().unwrap(), "EUR").unwrap();

        product
            .update_details("Gadget", "A gadget", new_price.clone())
            .unwrap();

        assert_eq!(product.name(), "Gadget");
        assert_eq!(product.description(), "A gadget");
        assert_eq!(product.price(), &new_price);
        // 库存不受影响
        assert_eq!(product.stock_quantity(), 5);
        assert!(product.updated_at().is_some());
    }

    #[test]
    fn test_update_details_rejects_empty_name() {
        let mut product = test_product(5);
        let result = product.update_details("", "desc", test_price());
        assert!(matches!(result, Err(ProductError::InvalidName)));
        // 失败不产生部分变更
        assert_eq!(product.name(), "Widget");
        assert_eq!(product.description(), "A widget");
        assert!(product.updated_at().is_none());
    }

    #[test]
    fn test_update_stock_recomputes_availability() {
        let mut product = test_product(5);

        product.update_stock(0).unwrap();
        assert_eq!(product.stock_quantity(), 0);
        assert!(!product.is_available());

        product.update_stock(3).unwrap();
        assert_eq!(product.stock_quantity(), 3);
        assert!(product.is_available());
    }

    #[test]
    fn test_update_stock_rejects_negative() {
        let mut product = test_product(5);
        let result = product.update_stock(-1);
        assert!(matches!(result, Err(ProductError::InvalidStock)));
        assert_eq!(product.stock_quantity(), 5);
        assert!(product.is_available());
        assert!(product.updated_at().is_none());
    }

    #[test]
    fn test_mutations_never_touch_created_at() {
        let mut product = test_product(5);
        let created_at = product.created_at();

        product.update_details("Gadget", "", test_price()).unwrap();
        product.update_stock(7).unwrap();

        assert_eq!(product.created_at(), created_at);
    }

    #[test]
    fn test_updated_at_advances_on_each_mutation() {
        let mut product = test_product(5);

        product.update_details("Gadget", "", test_price()).unwrap();
        let first = product.updated_at().unwrap();

        product.update_stock(7).unwrap();
        let second = product.updated_at().unwrap();

        assert!(second >= first);
    }

    #[test]
    fn test_from_parts_restores_persisted_state() {
        let id = ProductId::new("0198b3a0-0000-7000-8000-000000000000").unwrap();
        let created_at = Utc::now();
        let updated_at = Some(Utc::now());

        let mut product = Product::from_parts(
            id.clone(),
            "Widget".to_string(),
            "A widget".to_string(),
            test_price(),
            test_sku(),
            0,
            created_at,
            updated_at,
        );

        assert_eq!(product.id(), &id);
        assert_eq!(product.created_at(), created_at);
        assert_eq!(product.updated_at(), updated_at);
        // 可用性重新推导，不信任存储值
        assert!(!product.is_available());
        // 重建不排队事件
        assert!(product.take_events().is_empty());
    }
}
