pub mod controllers;
pub mod models;
pub mod repositories;

pub use models::{ProductRef, Sale, SaleLineItem};
pub use repositories::SaleRepository;
