//! 领域事件模块

mod product_events;
mod publisher;

pub use product_events::{EventMetadata, ProductCreated, ProductEvent};
pub use publisher::ProductEventPublisher;
