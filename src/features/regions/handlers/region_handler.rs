use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::regions::models::{CityWithRegion, Region};
use crate::features::regions::services::RegionService;

/// List all regions
#[utoipa::path(
    get,
    path = "/api/regions",
    responses(
        (status = 200, description = "List of regions", body = Vec<Region>),
    ),
    tag = "reference-data"
)]
pub async fn list_regions(State(service): State<Arc<RegionService>>) -> Result<Json<Vec<Region>>> {
    let regions = service.list_regions().await?;
    Ok(Json(regions))
}

/// List all cities with their region name
#[utoipa::path(
    get,
    path = "/api/cities",
    responses(
        (status = 200, description = "List of cities", body = Vec<CityWithRegion>),
    ),
    tag = "reference-data"
)]
pub async fn list_cities(
    State(service): State<Arc<RegionService>>,
) -> Result<Json<Vec<CityWithRegion>>> {
    let cities = service.list_cities().await?;
    Ok(Json(cities))
}
