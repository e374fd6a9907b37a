//! 值对象模块

mod price;
mod product_id;
mod sku;

pub use price::{Price, PriceError};
pub use product_id::{ProductId, ProductIdError};
pub use sku::{Sku, SkuError};
