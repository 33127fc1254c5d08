use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// Fixed taxonomy entry; read-only reference data after seeding.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub icon: Option<String>,
    pub description: Option<String>,
}
