//! 事件发布接口

use async_trait::async_trait;
use errors::AppResult;

use super::product_events::ProductEvent;

/// 产品事件发布者接口
///
/// 聚合在状态变更时排队领域事件，应用层在持久化成功后
/// 取出并通过该接口发布。
#[async_trait]
pub trait ProductEventPublisher: Send + Sync {
    /// 发布事件
    async fn publish(&self, event: &ProductEvent) -> AppResult<()>;
}
