use sqlx::MySqlPool;

use crate::core::{AppError, Result};
use crate::modules::catalog::models::ProductCategory;

/// Repository for product category reads
pub struct CategoryRepository {
    pool: MySqlPool,
}

impl CategoryRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// List categories with pagination, newest first
    pub async fn list(&self, limit: i64, offset: i64) -> Result<(Vec<ProductCategory>, i64)> {
        let categories = sqlx::query_as::<_, ProductCategory>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM m_product_category
            WHERE deleted_at IS NULL
            ORDER BY created_at DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM m_product_category WHERE deleted_at IS NULL",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok((categories, total))
    }

    /// Fetch a single category by id
    pub async fn find_by_id(&self, id: i64) -> Result<ProductCategory> {
        sqlx::query_as::<_, ProductCategory>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM m_product_category
            WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::not_found(format!("product category {}", id)))
    }
}
