pub mod category_controller;
pub mod product_controller;
