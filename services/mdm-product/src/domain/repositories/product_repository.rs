//! 产品仓储接口

use async_trait::async_trait;
use errors::AppResult;

use crate::domain::entities::Product;
use crate::domain::value_objects::{ProductId, Sku};

/// 产品仓储接口
///
/// 所有操作均为协作式可取消：调用方丢弃未完成的 future 即中止挂起的 I/O。
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 根据 ID 查找产品
    async fn find_by_id(&self, id: &ProductId) -> AppResult<Option<Product>>;

    /// 查询全部产品
    async fn find_all(&self) -> AppResult<Vec<Product>>;

    /// 保存产品（新建）
    async fn save(&self, product: &Product) -> AppResult<()>;

    /// 更新产品（必须已存在，不做 upsert）
    async fn update(&self, product: &Product) -> AppResult<()>;

    /// 删除产品
    async fn delete(&self, id: &ProductId) -> AppResult<()>;

    /// 检查 SKU 是否存在
    async fn exists_by_sku(&self, sku: &Sku) -> AppResult<bool>;
}
