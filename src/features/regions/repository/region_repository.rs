use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::core::error::{AppError, Result};
use crate::features::regions::models::{CityWithRegion, Region};

#[async_trait]
pub trait RegionRepository: Send + Sync {
    /// All regions, unfiltered.
    async fn list_regions(&self) -> Result<Vec<Region>>;
    /// All cities joined with their region's name. The join is inner: a city
    /// whose region_id dangles is excluded.
    async fn list_cities(&self) -> Result<Vec<CityWithRegion>>;
}

pub struct SqliteRegionRepository {
    pool: SqlitePool,
}

impl SqliteRegionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegionRepository for SqliteRegionRepository {
    async fn list_regions(&self) -> Result<Vec<Region>> {
        let regions = sqlx::query_as::<_, Region>("SELECT id, name FROM regions")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list regions: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(regions)
    }

    async fn list_cities(&self) -> Result<Vec<CityWithRegion>> {
        let cities = sqlx::query_as::<_, CityWithRegion>(
            r#"
            SELECT cities.id, cities.name, cities.region_id, regions.name AS region_name
            FROM cities
            JOIN regions ON cities.region_id = regions.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list cities: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(cities)
    }
}
