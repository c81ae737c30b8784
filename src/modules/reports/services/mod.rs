pub mod aggregator;
pub mod exporter;
pub mod period;
pub mod report_service;

pub use aggregator::aggregate_sales;
pub use exporter::render_workbook;
pub use period::generate_period;
pub use report_service::ReportService;
