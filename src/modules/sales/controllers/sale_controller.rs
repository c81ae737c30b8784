use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::MySqlPool;
use uuid::Uuid;

use crate::core::{AppError, Page, PageQuery};
use crate::modules::reports::services::period::parse_report_date;
use crate::modules::sales::repositories::MySqlSaleRepository;

/// Query parameters for listing sales
#[derive(Debug, Deserialize)]
pub struct ListSalesQuery {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
    /// Optional creation-date window, format YYYY-MM-DD
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

impl ListSalesQuery {
    fn page_query(&self) -> PageQuery {
        let defaults = PageQuery::default();
        PageQuery {
            page: self.page.unwrap_or(defaults.page),
            per_page: self.per_page.unwrap_or(defaults.per_page),
        }
    }
}

/// List sales
/// GET /sales
pub async fn list_sales(
    pool: web::Data<MySqlPool>,
    query: web::Query<ListSalesQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();

    let start_date = query
        .start_date
        .as_deref()
        .map(parse_report_date)
        .transpose()?;
    let end_date = query
        .end_date
        .as_deref()
        .map(parse_report_date)
        .transpose()?;

    let page = query.page_query();
    let repo = MySqlSaleRepository::new(pool.get_ref().clone());
    let (sales, total) = repo
        .list(page.limit(), page.offset(), start_date, end_date)
        .await?;

    Ok(HttpResponse::Ok().json(Page::new(sales, total, &page)))
}

/// Get sale by id with its line items
/// GET /sales/{id}
pub async fn get_sale(
    pool: web::Data<MySqlPool>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let repo = MySqlSaleRepository::new(pool.get_ref().clone());
    let sale = repo.find_by_id(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(sale))
}

/// Configure sale routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/sales")
            .route("", web::get().to(list_sales))
            .route("/{id}", web::get().to(get_sale)),
    );
}
