//! Business listings: search, detail, owner dashboard and creation.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/listings` | No | Filtered search over published listings |
//! | GET | `/api/listings/{slug}` | No | Detail with reviews; counts a view |
//! | GET | `/api/my-listings` | Yes | Caller's own listings, any status |
//! | POST | `/api/listings` | Yes | Create a listing (starts pending) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

pub use services::ListingService;
