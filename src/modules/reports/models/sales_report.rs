use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-date sales bucket inside a product aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateTransaction {
    pub date_transaction: String,
    pub total_sales: f64,
}

/// Sales aggregated for one product across the requested period.
///
/// `transactions` holds one entry per period date (zero-filled when no sale
/// fell on that date), keyed by the YYYY-MM-DD date string; the BTreeMap
/// keeps the JSON output in chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductAggregate {
    pub product_id: Uuid,
    pub product_name: String,
    pub transactions: BTreeMap<String, DateTransaction>,
    pub transactions_total: f64,
}

/// Sales aggregated for one category, carrying its products in first-seen
/// order across the input sale list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAggregate {
    pub category_id: i64,
    pub category_name: String,
    pub category_total: f64,
    pub products: Vec<ProductAggregate>,
}

impl ProductAggregate {
    /// Create an empty product aggregate with a zero bucket for every period date
    pub fn new(product_id: Uuid, product_name: String, period: &[String]) -> Self {
        let transactions = period
            .iter()
            .map(|date| {
                (
                    date.clone(),
                    DateTransaction {
                        date_transaction: date.clone(),
                        total_sales: 0.0,
                    },
                )
            })
            .collect();

        Self {
            product_id,
            product_name,
            transactions,
            transactions_total: 0.0,
        }
    }

    /// Sales total for one period date; 0 when the date is outside the period
    pub fn sales_on(&self, date: &str) -> f64 {
        self.transactions
            .get(date)
            .map(|t| t.total_sales)
            .unwrap_or(0.0)
    }
}

impl CategoryAggregate {
    pub fn new(category_id: i64, category_name: String) -> Self {
        Self {
            category_id,
            category_name,
            category_total: 0.0,
            products: Vec::new(),
        }
    }
}
