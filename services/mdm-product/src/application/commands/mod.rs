//! 命令模块

mod product_commands;

pub use product_commands::{CreateProductCommand, UpdateProductCommand};
