pub mod category;
pub mod product;

pub use category::ProductCategory;
pub use product::{Product, ProductRow};
