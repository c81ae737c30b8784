pub mod sale;

pub use sale::{ProductRef, Sale, SaleLineItem};
