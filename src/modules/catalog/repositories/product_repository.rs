use sqlx::MySqlPool;
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::catalog::models::{Product, ProductRow};

/// Repository for product reads
pub struct ProductRepository {
    pool: MySqlPool,
}

impl ProductRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// List products with pagination, newest first
    pub async fn list(&self, limit: i64, offset: i64) -> Result<(Vec<Product>, i64)> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, product_category_id, name, price, description, photo,
                   is_available, created_at, updated_at
            FROM m_product
            WHERE deleted_at IS NULL
            ORDER BY created_at DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let products = rows
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>>>()?;

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM m_product WHERE deleted_at IS NULL",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok((products, total))
    }

    /// Fetch a single product by id
    pub async fn find_by_id(&self, id: Uuid) -> Result<Product> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, product_category_id, name, price, description, photo,
                   is_available, created_at, updated_at
            FROM m_product
            WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::not_found(format!("product {}", id)))?;

        Product::try_from(row)
    }
}
