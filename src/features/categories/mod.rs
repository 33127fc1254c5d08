pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

pub use services::CategoryService;
