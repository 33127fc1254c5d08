pub mod listing_handler;

pub use listing_handler::{
    __path_create_listing, __path_get_listing, __path_my_listings, __path_search_listings,
    create_listing, get_listing, my_listings, search_listings,
};
