//! SKU 值对象

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// SKU 错误
#[derive(Debug, Error)]
pub enum SkuError {
    #[error("SKU 不能为空")]
    Empty,
    #[error("SKU 包含无效字符: {0}")]
    InvalidCharacter(char),
}

/// SKU 值对象
///
/// 业务规则:
/// - 不能为空
/// - 只允许字母、数字和连字符
/// - 创建时统一转换为大写
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sku(String);

impl Sku {
    /// 创建新的 SKU
    pub fn new(value: impl Into<String>) -> Result<Self, SkuError> {
        let value = value.into();

        if value.trim().is_empty() {
            return Err(SkuError::Empty);
        }

        // 验证字符（不做 trim：空白属于无效字符）
        for c in value.chars() {
            if !c.is_alphanumeric() && c != '-' {
                return Err(SkuError::InvalidCharacter(c));
            }
        }

        Ok(Self(value.to_uppercase()))
    }

    /// 获取 SKU 字符串
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 转换为字符串
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Sku {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Sku {
    type Error = SkuError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Sku {
    type Error = SkuError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
