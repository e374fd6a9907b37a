//! PostgreSQL repository implementation

use async_trait::async_trait;
use errors::{AppError, AppResult};
use sqlx::PgPool;

use crate::domain::entities::Product;
use crate::domain::repositories::ProductRepository;
use crate::domain::value_objects::{ProductId, Sku};

use super::error_mapper::map_sqlx_error;
use super::rows::{ProductRow, product_from_row};

pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn find_by_id(&self, id: &ProductId) -> AppResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, price_amount, price_currency,
                   sku, stock_quantity, is_available, created_at, updated_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(product_from_row).transpose()
    }

    async fn find_all(&self) -> AppResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, price_amount, price_currency,
                   sku, stock_quantity, is_available, created_at, updated_at
            FROM products
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(product_from_row).collect()
    }

    async fn save(&self, product: &Product) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO products (
                id, name, description, price_amount, price_currency,
                sku, stock_quantity, is_available, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(product.id().as_str())
        .bind(product.name())
        .bind(product.description())
        .bind(product.price().amount())
        .bind(product.price().currency())
        .bind(product.sku().as_str())
        .bind(product.stock_quantity())
        .bind(product.is_available())
        .bind(product.created_at())
        .bind(product.updated_at())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn update(&self, product: &Product) -> AppResult<()> {
        // SKU 创建后不可变，不在更新列中
        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = $1,
                description = $2,
                price_amount = $3,
                price_currency = $4,
                stock_quantity = $5,
                is_available = $6,
                updated_at = $7
            WHERE id = $8
            "#,
        )
        .bind(product.name())
        .bind(product.description())
        .bind(product.price().amount())
        .bind(product.price().currency())
        .bind(product.stock_quantity())
        .bind(product.is_available())
        .bind(product.updated_at())
        .bind(product.id().as_str())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("产品不存在".to_string()));
        }

        Ok(())
    }

    async fn delete(&self, id: &ProductId) -> AppResult<()> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn exists_by_sku(&self, sku: &Sku) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM products WHERE sku = $1)")
                .bind(sku.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(result.0)
    }
}
