pub mod admin_dtos;

pub use admin_dtos::{CountDto, ModerationQueueQuery, StatsDto, UpdateListingStatusDto, ViewSumDto};
