use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::regions::handlers;
use crate::features::regions::services::RegionService;

/// Create routes for the regions feature (public)
pub fn routes(service: Arc<RegionService>) -> Router {
    Router::new()
        .route("/api/regions", get(handlers::list_regions))
        .route("/api/cities", get(handlers::list_cities))
        .with_state(service)
}
