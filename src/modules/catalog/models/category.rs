use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Product category, backed by the `m_product_category` table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProductCategory {
    pub id: i64,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
