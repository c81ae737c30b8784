use std::sync::Arc;

use tracing::{info, warn};

use crate::core::{AppError, Result};
use crate::modules::reports::models::CategoryAggregate;
use crate::modules::reports::services::aggregator::aggregate_sales;
use crate::modules::reports::services::exporter::render_workbook;
use crate::modules::reports::services::period::{date_range, parse_report_date};
use crate::modules::sales::repositories::SaleRepository;

/// Default upper bound on the report span: one leap year, inclusive
pub const DEFAULT_MAX_REPORT_DAYS: usize = 366;

/// Service producing sales reports over a date range with an optional
/// category filter
pub struct ReportService {
    sale_repo: Arc<dyn SaleRepository>,
    max_report_days: usize,
}

impl ReportService {
    pub fn new(sale_repo: Arc<dyn SaleRepository>) -> Self {
        Self {
            sale_repo,
            max_report_days: DEFAULT_MAX_REPORT_DAYS,
        }
    }

    pub fn with_max_report_days(mut self, max_report_days: usize) -> Self {
        self.max_report_days = max_report_days;
        self
    }

    /// Build the category → product → date aggregate tree for the range.
    ///
    /// Dates must be YYYY-MM-DD. A reversed range is not an error: it yields
    /// an empty period and an empty report. Ranges spanning more than the
    /// configured maximum number of days are rejected, since period length is
    /// the only unbounded scaling axis of the report.
    pub async fn sales_report(
        &self,
        start_date: &str,
        end_date: &str,
        category_id: Option<i64>,
    ) -> Result<Vec<CategoryAggregate>> {
        let (report, _period) = self.build_report(start_date, end_date, category_id).await?;
        Ok(report)
    }

    /// Build the aggregate tree and render it as an XLSX document
    pub async fn export_sales_report(
        &self,
        start_date: &str,
        end_date: &str,
        category_id: Option<i64>,
    ) -> Result<Vec<u8>> {
        let (report, period) = self.build_report(start_date, end_date, category_id).await?;
        render_workbook(&report, &period)
    }

    /// Shared parse / validate / fetch / aggregate pipeline; returns the
    /// period alongside the tree so the exporter can reuse it
    async fn build_report(
        &self,
        start_date: &str,
        end_date: &str,
        category_id: Option<i64>,
    ) -> Result<(Vec<CategoryAggregate>, Vec<String>)> {
        let start = parse_report_date(start_date)?;
        let end = parse_report_date(end_date)?;

        let period = date_range(start, end);
        if period.len() > self.max_report_days {
            return Err(AppError::validation(format!(
                "Date range too large: {} days (maximum {} days)",
                period.len(),
                self.max_report_days
            )));
        }

        info!(
            "Generating sales report: start={}, end={}, category={:?}",
            start, end, category_id
        );

        let sales = self
            .sale_repo
            .sales_by_category(start, end, category_id)
            .await?;

        let report = aggregate_sales(&sales, &period);

        if report.is_empty() {
            warn!("Empty sales report generated for period {} to {}", start, end);
        } else {
            info!(
                "Sales report generated: {} categories, {} sales",
                report.len(),
                sales.len()
            );
        }

        Ok((report, period))
    }
}
