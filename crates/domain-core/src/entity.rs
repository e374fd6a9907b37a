//! 实体基础 trait

use chrono::{DateTime, Utc};

/// 实体 trait
pub trait Entity {
    type Id;

    fn id(&self) -> &Self::Id;
}

/// 聚合根 trait
///
/// 聚合根负责维护自身的时间戳：创建时间在构造时固定，
/// 更新时间在每次成功变更时推进（未变更过的聚合为 None）。
pub trait AggregateRoot: Entity {
    fn created_at(&self) -> DateTime<Utc>;

    fn updated_at(&self) -> Option<DateTime<Utc>>;
}
