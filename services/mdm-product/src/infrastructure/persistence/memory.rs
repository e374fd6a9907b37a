//! In-memory repository implementation
//!
//! 用于测试和本地开发，语义与 PostgreSQL 实现保持一致
//! （非 upsert 更新、SKU 唯一约束）。

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use errors::{AppError, AppResult};

use crate::domain::entities::Product;
use crate::domain::repositories::ProductRepository;
use crate::domain::value_objects::{ProductId, Sku};

#[derive(Default)]
pub struct InMemoryProductRepository {
    products: RwLock<HashMap<String, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.products.read().map(|p| p.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, HashMap<String, Product>>> {
        self.products
            .read()
            .map_err(|_| AppError::internal("Repository lock poisoned"))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, HashMap<String, Product>>> {
        self.products
            .write()
            .map_err(|_| AppError::internal("Repository lock poisoned"))
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_id(&self, id: &ProductId) -> AppResult<Option<Product>> {
        Ok(self.read()?.get(id.as_str()).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Product>> {
        let mut products: Vec<Product> = self.read()?.values().cloned().collect();
        products.sort_by_key(|p| p.created_at());
        Ok(products)
    }

    async fn save(&self, product: &Product) -> AppResult<()> {
        let mut products = self.write()?;

        if products.contains_key(product.id().as_str()) {
            return Err(AppError::conflict("产品 ID 已存在"));
        }

        // SKU 唯一约束的内存等价物
        if products.values().any(|p| p.sku() == product.sku()) {
            return Err(AppError::conflict(
                "Duplicate entry violates unique constraint",
            ));
        }

        products.insert(product.id().as_str().to_string(), product.clone());
        Ok(())
    }

    async fn update(&self, product: &Product) -> AppResult<()> {
        let mut products = self.write()?;

        // 非 upsert：目标必须已存在
        match products.get_mut(product.id().as_str()) {
            Some(existing) => {
                *existing = product.clone();
                Ok(())
            }
            None => Err(AppError::not_found("产品不存在".to_string())),
        }
    }

    async fn delete(&self, id: &ProductId) -> AppResult<()> {
        self.write()?.remove(id.as_str());
        Ok(())
    }

    async fn exists_by_sku(&self, sku: &Sku) -> AppResult<bool> {
        Ok(self.read()?.values().any(|p| p.sku() == sku))
    }
}
