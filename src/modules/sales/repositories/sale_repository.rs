use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use sqlx::MySqlPool;
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::sales::models::{ProductRef, Sale, SaleLineItem};

/// Data-fetch boundary consumed by the report engine.
///
/// Returns sales created within the inclusive calendar-day range, each with
/// its resolved line items. Line items keep a `None` product when the product
/// has been deleted since the sale. `category_id` of `None` or `Some(0)`
/// means no category filter.
#[async_trait]
pub trait SaleRepository: Send + Sync {
    async fn sales_by_category(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        category_id: Option<i64>,
    ) -> Result<Vec<Sale>>;
}

/// MySQL implementation over `t_sales` / `t_sales_detail` and the catalog tables
pub struct MySqlSaleRepository {
    pool: MySqlPool,
}

/// Sale header row used by the paginated list endpoint
#[derive(Debug, sqlx::FromRow)]
struct SaleRow {
    id: String,
    total: f64,
    customer_id: String,
    created_at: NaiveDateTime,
}

/// Flat sale/line/product/category join row; product columns are NULL for
/// lines whose product has been soft-deleted
#[derive(Debug, sqlx::FromRow)]
struct SaleLineRow {
    sale_id: String,
    sale_total: f64,
    customer_id: String,
    created_at: NaiveDateTime,
    price: Option<f64>,
    total_item: Option<i64>,
    product_id: Option<String>,
    product_name: Option<String>,
    category_id: Option<i64>,
    category_name: Option<String>,
}

impl MySqlSaleRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// List sale headers with pagination and an optional creation-date window
    pub async fn list(
        &self,
        limit: i64,
        offset: i64,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<(Vec<Sale>, i64)> {
        let rows = sqlx::query_as::<_, SaleRow>(
            r#"
            SELECT id, total, customer_id, created_at
            FROM t_sales
            WHERE deleted_at IS NULL
              AND (? IS NULL OR DATE(created_at) >= ?)
              AND (? IS NULL OR DATE(created_at) <= ?)
            ORDER BY created_at DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(start_date)
        .bind(start_date)
        .bind(end_date)
        .bind(end_date)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let sales = rows
            .into_iter()
            .map(|row| {
                Ok(Sale {
                    id: parse_uuid(&row.id, "sale")?,
                    total: row.total,
                    customer_id: parse_uuid(&row.customer_id, "customer")?,
                    created_at: row.created_at,
                    items: Vec::new(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM t_sales
            WHERE deleted_at IS NULL
              AND (? IS NULL OR DATE(created_at) >= ?)
              AND (? IS NULL OR DATE(created_at) <= ?)
            "#,
        )
        .bind(start_date)
        .bind(start_date)
        .bind(end_date)
        .bind(end_date)
        .fetch_one(&self.pool)
        .await?;

        Ok((sales, total))
    }

    /// Fetch a single sale with its line items
    pub async fn find_by_id(&self, id: Uuid) -> Result<Sale> {
        let rows = sqlx::query_as::<_, SaleLineRow>(
            r#"
            SELECT s.id AS sale_id, s.total AS sale_total, s.customer_id,
                   s.created_at, d.price, d.total_item,
                   p.id AS product_id, p.name AS product_name,
                   p.product_category_id AS category_id, c.name AS category_name
            FROM t_sales s
            LEFT JOIN t_sales_detail d ON d.t_sales_id = s.id
            LEFT JOIN m_product p ON p.id = d.m_product_id AND p.deleted_at IS NULL
            LEFT JOIN m_product_category c ON c.id = p.product_category_id
            WHERE s.id = ? AND s.deleted_at IS NULL
            ORDER BY d.id
            "#,
        )
        .bind(id.to_string())
        .fetch_all(&self.pool)
        .await?;

        group_sales(rows)?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::not_found(format!("sale {}", id)))
    }
}

#[async_trait]
impl SaleRepository for MySqlSaleRepository {
    async fn sales_by_category(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
        category_id: Option<i64>,
    ) -> Result<Vec<Sale>> {
        let category_id = category_id.unwrap_or(0);

        let rows = sqlx::query_as::<_, SaleLineRow>(
            r#"
            SELECT s.id AS sale_id, s.total AS sale_total, s.customer_id,
                   s.created_at, d.price, d.total_item,
                   p.id AS product_id, p.name AS product_name,
                   p.product_category_id AS category_id, c.name AS category_name
            FROM t_sales s
            JOIN t_sales_detail d ON d.t_sales_id = s.id
            LEFT JOIN m_product p ON p.id = d.m_product_id AND p.deleted_at IS NULL
            LEFT JOIN m_product_category c ON c.id = p.product_category_id
            WHERE s.deleted_at IS NULL
              AND DATE(s.created_at) BETWEEN ? AND ?
              AND (? = 0 OR p.product_category_id = ?)
            ORDER BY s.created_at, s.id, d.id
            "#,
        )
        .bind(start_date)
        .bind(end_date)
        .bind(category_id)
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        group_sales(rows)
    }
}

fn parse_uuid(value: &str, entity: &str) -> Result<Uuid> {
    Uuid::parse_str(value)
        .map_err(|_| AppError::internal(format!("Malformed {} id: {}", entity, value)))
}

/// Fold the flat join rows back into sales with nested line items.
/// Rows must arrive ordered by sale id.
fn group_sales(rows: Vec<SaleLineRow>) -> Result<Vec<Sale>> {
    let mut sales: Vec<Sale> = Vec::new();

    for row in rows {
        let sale_id = parse_uuid(&row.sale_id, "sale")?;

        if sales.last().map(|s| s.id) != Some(sale_id) {
            sales.push(Sale {
                id: sale_id,
                total: row.sale_total,
                customer_id: parse_uuid(&row.customer_id, "customer")?,
                created_at: row.created_at,
                items: Vec::new(),
            });
        }

        // A sale without any detail rows still produces one join row with
        // NULL line columns; it carries no line item.
        let (price, total_item) = match (row.price, row.total_item) {
            (Some(price), Some(total_item)) => (price, total_item),
            _ => continue,
        };

        let product = match (row.product_id, row.product_name, row.category_id) {
            (Some(id), Some(name), Some(category_id)) => Some(ProductRef {
                id: parse_uuid(&id, "product")?,
                name,
                category_id,
                category_name: row.category_name.unwrap_or_default(),
            }),
            _ => None,
        };

        let sale = sales
            .last_mut()
            .ok_or_else(|| AppError::internal("Sale grouping lost its current sale"))?;

        sale.items.push(SaleLineItem {
            price,
            total_item,
            product,
        });
    }

    Ok(sales)
}
