use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::features::admin::handlers;
use crate::features::admin::services::AdminService;

/// Admin routes; nested under `/api/admin` behind the auth middleware.
pub fn routes(service: Arc<AdminService>) -> Router {
    Router::new()
        .route("/stats", get(handlers::get_stats))
        .route("/listings", get(handlers::list_moderation_queue))
        .route("/listings/{id}/status", patch(handlers::update_listing_status))
        .with_state(service)
}
