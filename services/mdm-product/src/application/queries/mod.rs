//! 查询模块

mod product_queries;

pub use product_queries::{GetProductQuery, ListProductsQuery};
