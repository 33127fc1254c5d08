use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::listings::handlers;
use crate::features::listings::services::ListingService;

/// Public search and detail routes.
pub fn public_routes(service: Arc<ListingService>) -> Router {
    Router::new()
        .route("/api/listings", get(handlers::search_listings))
        .route("/api/listings/{slug}", get(handlers::get_listing))
        .with_state(service)
}

/// Owner routes behind the auth middleware.
pub fn protected_routes(service: Arc<ListingService>) -> Router {
    Router::new()
        .route("/api/my-listings", get(handlers::my_listings))
        .route("/api/listings", post(handlers::create_listing))
        .with_state(service)
}
