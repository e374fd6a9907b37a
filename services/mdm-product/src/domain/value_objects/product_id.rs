//! 产品 ID 值对象

use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// 产品 ID 错误
#[derive(Debug, Error)]
pub enum ProductIdError {
    #[error("产品 ID 不能为空")]
    Empty,
}

/// 产品 ID 值对象
///
/// 不透明标识符：任何非空字符串都是合法 ID。
/// 新建产品时通过 [`ProductId::generate`] 生成 UUID 形式的 ID。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct ProductId(String);

impl ProductId {
    /// 从已有字符串创建
    pub fn new(id: impl Into<String>) -> Result<Self, ProductIdError> {
        let id = id.into();

        if id.trim().is_empty() {
            return Err(ProductIdError::Empty);
        }

        Ok(Self(id))
    }

    /// 生成全新的唯一 ID
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// 获取 ID 字符串
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 转换为字符串
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ProductId {
    type Error = ProductIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ProductId {
    type Error = ProductIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_product_id() {
        let id = ProductId::new("PRD-001").unwrap();
        assert_eq!(id.as_str(), "PRD-001");
    }

    #[test]
    fn test_empty_id() {
        let result = ProductId::new("");
        assert!(matches!(result, Err(ProductIdError::Empty)));
    }

    #[test]
    fn test_whitespace_only_id() {
        let result = ProductId::new("   ");
        assert!(matches!(result, Err(ProductIdError::Empty)));
    }

    #[test]
    fn test_generate_is_unique() {
        let a = ProductId::generate();
        let b = ProductId::generate();
        assert!(!a.as_str().is_empty());
        assert_ne!(a, b);
    }

    #[test]
    fn test_equality_by_value() {
        let a = ProductId::new("PRD-001").unwrap();
        let b = ProductId::new("PRD-001").unwrap();
        assert_eq!(a, b);
    }
}
