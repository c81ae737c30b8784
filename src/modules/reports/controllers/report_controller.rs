use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::MySqlPool;

use crate::config::Config;
use crate::core::AppError;
use crate::modules::reports::services::exporter::EXPORT_FILE_NAME;
use crate::modules::reports::services::ReportService;
use crate::modules::sales::repositories::MySqlSaleRepository;

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Query parameters for the sales report endpoints
#[derive(Debug, Deserialize)]
pub struct SalesReportQuery {
    /// Start of the reporting period (inclusive, format: YYYY-MM-DD)
    pub start_date: String,
    /// End of the reporting period (inclusive, format: YYYY-MM-DD)
    pub end_date: String,
    /// Optional category filter; absent or 0 means no filter
    #[serde(default)]
    pub category_id: Option<i64>,
}

fn report_service(pool: &MySqlPool, config: &Config) -> ReportService {
    let sale_repo = Arc::new(MySqlSaleRepository::new(pool.clone()));
    ReportService::new(sale_repo).with_max_report_days(config.app.max_report_days as usize)
}

/// Sales report grouped by category, product and date
/// GET /report
pub async fn get_sales_report(
    pool: web::Data<MySqlPool>,
    config: web::Data<Config>,
    query: web::Query<SalesReportQuery>,
) -> Result<HttpResponse, AppError> {
    let report = report_service(pool.get_ref(), config.get_ref())
        .sales_report(&query.start_date, &query.end_date, query.category_id)
        .await?;

    Ok(HttpResponse::Ok().json(report))
}

/// Sales report rendered as a downloadable XLSX document
/// GET /report/export
pub async fn export_sales_report(
    pool: web::Data<MySqlPool>,
    config: web::Data<Config>,
    query: web::Query<SalesReportQuery>,
) -> Result<HttpResponse, AppError> {
    let workbook = report_service(pool.get_ref(), config.get_ref())
        .export_sales_report(&query.start_date, &query.end_date, query.category_id)
        .await?;

    Ok(HttpResponse::Ok()
        .content_type(XLSX_CONTENT_TYPE)
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
        ))
        .body(workbook))
}

/// Configure report routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/report")
            .route("", web::get().to(get_sales_report))
            .route("/export", web::get().to(export_sales_report)),
    );
}
