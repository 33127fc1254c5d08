use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::listings::models::ListingStatus;

#[derive(Debug, Serialize, ToSchema)]
pub struct CountDto {
    pub count: i64,
}

/// Sum of all view counters; null when there are no listings.
#[derive(Debug, Serialize, ToSchema)]
pub struct ViewSumDto {
    pub count: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatsDto {
    pub users: CountDto,
    pub listings: CountDto,
    pub pending: CountDto,
    pub views: ViewSumDto,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ModerationQueueQuery {
    /// Status to list; defaults to the pending queue.
    pub status: Option<ListingStatus>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateListingStatusDto {
    /// Target status; only `published` and `rejected` are accepted.
    pub status: ListingStatus,
}
