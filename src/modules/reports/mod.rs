pub mod controllers;
pub mod models;
pub mod services;

pub use models::{CategoryAggregate, DateTransaction, ProductAggregate};
pub use services::ReportService;
