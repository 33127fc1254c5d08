pub mod listing_repository;
pub mod review_repository;

pub use listing_repository::{ListingRepository, ListingSearchFilters, SqliteListingRepository};
pub use review_repository::{ReviewRepository, SqliteReviewRepository};
