use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A review joined with the reviewing user's name.
///
/// Reviews are immutable once created; rating is constrained to 1..=5 by the
/// schema.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct Review {
    pub id: i64,
    pub listing_id: i64,
    pub user_id: i64,
    pub rating: i64,
    pub comment: Option<String>,
    pub created_at: NaiveDateTime,
    pub user_name: String,
}
