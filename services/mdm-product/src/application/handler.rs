//! Business logic handler

use std::sync::Arc;

use errors::{AppError, AppResult};
use tracing::{info, warn};

use crate::domain::entities::Product;
use crate::domain::events::ProductEventPublisher;
use crate::domain::repositories::ProductRepository;
use crate::domain::value_objects::{Price, ProductId, Sku};

use super::commands::*;
use super::queries::*;

pub struct ServiceHandler {
    product_repo: Arc<dyn ProductRepository>,
    event_publisher: Arc<dyn ProductEventPublisher>,
}

impl ServiceHandler {
    pub fn new(
        product_repo: Arc<dyn ProductRepository>,
        event_publisher: Arc<dyn ProductEventPublisher>,
    ) -> Self {
        Self {
            product_repo,
            event_publisher,
        }
    }

    // ========== 命令 ==========

    /// 创建产品
    pub async fn create_product(&self, cmd: CreateProductCommand) -> AppResult<ProductId> {
        info!("Creating product with SKU: {}", cmd.sku);

        // 1. 构造 SKU 值对象
        let sku = Sku::new(cmd.sku).map_err(|e| AppError::validation(e.to_string()))?;

        // 2. 检查 SKU 是否已存在
        let exists = self.product_repo.exists_by_sku(&sku).await?;
        if exists {
            return Err(AppError::conflict(format!("SKU {} 已存在", sku)));
        }

        // 3. 生成产品 ID
        let product_id = ProductId::generate();

        // 4. 构造价格值对象
        let price = Price::new(cmd.price, cmd.currency)
            .map_err(|e| AppError::validation(e.to_string()))?;

        // 5. 创建产品聚合
        let mut product = Product::create(
            product_id.clone(),
            cmd.name,
            cmd.description,
            price,
            sku,
            cmd.stock_quantity,
        )
        .map_err(|e| AppError::validation(e.to_string()))?;

        // 6. 持久化
        self.product_repo.save(&product).await?;

        // 7. 持久化成功后发布领域事件（尽力而为的内存通知）
        for event in product.take_events() {
            if let Err(e) = self.event_publisher.publish(&event).await {
                warn!("Failed to publish {} event: {}", event.event_type(), e);
            }
        }

        info!("Product created successfully: {}", product_id);
        Ok(product_id)
    }

    /// 更新产品
    pub async fn update_product(&self, cmd: UpdateProductCommand) -> AppResult<()> {
        info!("Updating product: {}", cmd.id);

        // 1. 解析产品 ID
        let product_id =
            ProductId::new(cmd.id).map_err(|e| AppError::validation(e.to_string()))?;

        // 2. 获取现有产品
        let mut product = self
            .product_repo
            .find_by_id(&product_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("产品 {} 不存在", product_id)))?;

        // 3. 更新名称、描述和价格
        let price = Price::new(cmd.price, cmd.currency)
            .map_err(|e| AppError::validation(e.to_string()))?;
        product
            .update_details(cmd.name, cmd.description, price)
            .map_err(|e| AppError::validation(e.to_string()))?;

        // 4. 提供库存时同时更新库存
        if let Some(quantity) = cmd.stock_quantity {
            product
                .update_stock(quantity)
                .map_err(|e| AppError::validation(e.to_string()))?;
        }

        // 5. 保存更新（SKU 创建后不可变，无需重查唯一性）
        self.product_repo.update(&product).await?;

        info!("Product updated successfully: {}", product_id);
        Ok(())
    }

    // ========== 查询 ==========

    /// 获取产品
    pub async fn get_product(&self, query: GetProductQuery) -> AppResult<Product> {
        let product_id =
            ProductId::new(query.id).map_err(|e| AppError::validation(e.to_string()))?;

        let product = self
            .product_repo
            .find_by_id(&product_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("产品 {} 不存在", product_id)))?;

        Ok(product)
    }

    /// 列表查询
    pub async fn list_products(&self, _query: ListProductsQuery) -> AppResult<Vec<Product>> {
        let products = self.product_repo.find_all().await?;

        info!("Found {} products", products.len());
        Ok(products)
    }
}
