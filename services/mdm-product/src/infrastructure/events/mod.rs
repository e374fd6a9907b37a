//! 事件发布实现

mod tracing_publisher;

pub use tracing_publisher::TracingEventPublisher;
