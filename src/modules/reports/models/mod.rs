pub mod sales_report;

pub use sales_report::{CategoryAggregate, DateTransaction, ProductAggregate};
