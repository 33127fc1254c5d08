pub mod region;

pub use region::{CityWithRegion, Region};
