//! WarungPOS Business Management API Library
//!
//! This library provides the product catalog, sales transaction and sales
//! reporting functionality for the WarungPOS backend.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::catalog;
pub use modules::reports;
pub use modules::sales;
