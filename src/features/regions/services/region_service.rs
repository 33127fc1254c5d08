use std::sync::Arc;

use crate::core::error::Result;
use crate::features::regions::models::{CityWithRegion, Region};
use crate::features::regions::repository::RegionRepository;

/// Service for region and city reference data
pub struct RegionService {
    regions: Arc<dyn RegionRepository>,
}

impl RegionService {
    pub fn new(regions: Arc<dyn RegionRepository>) -> Self {
        Self { regions }
    }

    pub async fn list_regions(&self) -> Result<Vec<Region>> {
        self.regions.list_regions().await
    }

    pub async fn list_cities(&self) -> Result<Vec<CityWithRegion>> {
        self.regions.list_cities().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::regions::repository::SqliteRegionRepository;
    use crate::shared::test_helpers::seeded_pool;

    #[tokio::test]
    async fn lists_seeded_regions_and_cities() {
        let pool = seeded_pool().await;
        let service = RegionService::new(Arc::new(SqliteRegionRepository::new(pool)));

        let regions = service.list_regions().await.unwrap();
        assert_eq!(regions.len(), 8);

        let cities = service.list_cities().await.unwrap();
        assert_eq!(cities.len(), 8);
        let tana = cities.iter().find(|c| c.name == "Antananarivo").unwrap();
        assert_eq!(tana.region_name, "Analamanga");
    }

    #[tokio::test]
    async fn city_with_dangling_region_is_excluded() {
        let pool = seeded_pool().await;

        // region_id is nullable, so a city can exist without a region; the
        // inner join must drop it.
        sqlx::query("INSERT INTO cities (name, region_id) VALUES ('Nosy Be', NULL)")
            .execute(&pool)
            .await
            .unwrap();

        let service = RegionService::new(Arc::new(SqliteRegionRepository::new(pool)));
        let cities = service.list_cities().await.unwrap();
        assert!(cities.iter().all(|c| c.name != "Nosy Be"));
    }
}
