//! API 层

pub mod dto;
pub mod routes;

pub use dto::{CreateProductRequest, CreateProductResponse, ProductDto, UpdateProductRequest};
pub use routes::api_routes;
