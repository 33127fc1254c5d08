use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct Region {
    pub id: i64,
    pub name: String,
}

/// City row joined with its region's name.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct CityWithRegion {
    pub id: i64,
    pub name: String,
    pub region_id: i64,
    pub region_name: String,
}
