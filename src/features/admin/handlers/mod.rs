pub mod admin_handlers;

pub use admin_handlers::{
    __path_get_stats, __path_list_moderation_queue, __path_update_listing_status, get_stats,
    list_moderation_queue, update_listing_status,
};
