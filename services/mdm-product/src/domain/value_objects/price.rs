//! 价格值对象

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 价格错误
#[derive(Debug, Error)]
pub enum PriceError {
    #[error("价格不能为负数")]
    NegativeAmount,
    #[error("货币不能为空")]
    EmptyCurrency,
}

/// 价格值对象
///
/// 金额与货币组成的整体，按 (金额, 货币) 比较相等：
/// 金额相同货币不同的两个价格不是同一个价格。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Price {
    amount: Decimal,
    currency: String,
}

impl Price {
    /// 创建新的价格
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Result<Self, PriceError> {
        if amount < Decimal::ZERO {
            return Err(PriceError::NegativeAmount);
        }

        let currency = currency.into();
        if currency.trim().is_empty() {
            return Err(PriceError::EmptyCurrency);
        }

        Ok(Self { amount, currency })
    }

    /// 获取金额
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// 获取货币代码
    pub fn currency(&self) -> &str {
        &self.currency
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_valid_price() {
        let price = Price::new(dec("9.99"), "USD").unwrap();
        assert_eq!(price.amount(), dec("9.99"));
        assert_eq!(price.currency(), "USD");
    }

    #[test]
    fn test_zero_amount_is_valid() {
        assert!(Price::new(Decimal::ZERO, "USD").is_ok());
    }

    #[test]
    fn test_negative_amount() {
        let result = Price::new(dec("-0.01"), "USD");
        assert!(matches!(result, Err(PriceError::NegativeAmount)));
    }

    #[test]
    fn test_empty_currency() {
        let result = Price::new(dec("9.99"), "");
        assert!(matches!(result, Err(PriceError::EmptyCurrency)));
    }

    #[test]
    fn test_whitespace_currency() {
        let result = Price::new(dec("9.99"), "  ");
        assert!(matches!(result, Err(PriceError::EmptyCurrency)));
    }

    #[test]
    fn test_equality_includes_currency() {
        let usd = Price::new(dec("9.99"), "USD").unwrap();
        let eur = Price::new(dec("9.99"), "EUR").unwrap();
        let usd_again = Price::new(dec("9.99"), "USD").unwrap();
        assert_ne!(usd, eur);
        assert_eq!(usd, usd_again);
    }
}
