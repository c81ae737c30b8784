use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, Result};

/// Product, backed by the `m_product` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub product_category_id: i64,
    pub name: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "photo_url", skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub is_available: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Raw product row; ids are stored as CHAR(36) columns
#[derive(Debug, sqlx::FromRow)]
pub struct ProductRow {
    pub id: String,
    pub product_category_id: i64,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    pub photo: Option<String>,
    pub is_available: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<ProductRow> for Product {
    type Error = AppError;

    fn try_from(row: ProductRow) -> Result<Self> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|_| AppError::internal(format!("Malformed product id: {}", row.id)))?;

        Ok(Product {
            id,
            product_category_id: row.product_category_id,
            name: row.name,
            price: row.price,
            description: row.description,
            photo: row.photo,
            is_available: row.is_available,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
