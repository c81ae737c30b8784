pub mod category_repository;
pub mod product_repository;

pub use category_repository::CategoryRepository;
pub use product_repository::ProductRepository;
