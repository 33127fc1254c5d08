pub mod listing_dto;

pub use listing_dto::{
    CreateListingDto, CreatedListingDto, ListingDetailDto, ListingSearchQuery,
};
