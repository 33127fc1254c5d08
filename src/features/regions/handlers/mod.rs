pub mod region_handler;

pub use region_handler::{__path_list_cities, __path_list_regions, list_cities, list_regions};
