pub mod region_repository;

pub use region_repository::{RegionRepository, SqliteRegionRepository};
