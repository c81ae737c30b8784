pub mod sale_controller;
