//! 事件日志发布者

use async_trait::async_trait;
use errors::{AppError, AppResult};
use tracing::info;

use crate::domain::events::{ProductEvent, ProductEventPublisher};

/// 将领域事件记录到日志的发布者
///
/// 范围内没有外部事件消费者，创建通知停留在进程内。
#[derive(Default)]
pub struct TracingEventPublisher;

impl TracingEventPublisher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProductEventPublisher for TracingEventPublisher {
    async fn publish(&self, event: &ProductEvent) -> AppResult<()> {
        let payload = serde_json::to_string(event)
            .map_err(|e| AppError::internal(format!("Failed to serialize event: {}", e)))?;

        info!(
            event_type = event.event_type(),
            occurred_at = %event.occurred_at(),
            payload = %payload,
            "Domain event published"
        );
        Ok(())
    }
}
