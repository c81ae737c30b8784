pub mod catalog;
pub mod reports;
pub mod sales;
