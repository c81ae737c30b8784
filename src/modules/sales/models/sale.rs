use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sale transaction, backed by the `t_sales` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    pub id: Uuid,
    /// Transaction grand total as recorded at sale time
    pub total: f64,
    #[serde(rename = "m_customer_id")]
    pub customer_id: Uuid,
    pub created_at: NaiveDateTime,
    #[serde(rename = "details")]
    pub items: Vec<SaleLineItem>,
}

/// One product/quantity/price entry within a sale, backed by `t_sales_detail`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleLineItem {
    pub price: f64,
    pub total_item: i64,
    /// Resolved product reference; `None` when the product has since been
    /// deleted. Such lines are kept in the data but excluded from reports.
    pub product: Option<ProductRef>,
}

/// Product and category identity carried by a sale line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRef {
    pub id: Uuid,
    pub name: String,
    pub category_id: i64,
    pub category_name: String,
}

impl SaleLineItem {
    /// Derived line total: unit price times quantity
    pub fn line_total(&self) -> f64 {
        self.price * self.total_item as f64
    }
}
