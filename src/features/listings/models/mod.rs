pub mod listing;
pub mod review;

pub use listing::{Listing, ListingStatus, NewListing};
pub use review::Review;
