//! 持久化模块

mod error_mapper;
mod memory;
mod postgres;
mod rows;

pub use error_mapper::map_sqlx_error;
pub use memory::InMemoryProductRepository;
pub use postgres::PostgresProductRepository;
pub use rows::{ProductRow, product_from_row};
