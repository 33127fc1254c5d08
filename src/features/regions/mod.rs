//! Regions and cities reference data.
//!
//! A city belongs to exactly one region; `/api/cities` returns each city
//! joined with its region's name.

pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

pub use services::RegionService;
