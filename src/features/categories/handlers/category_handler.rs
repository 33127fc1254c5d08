use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::categories::models::Category;
use crate::features::categories::services::CategoryService;

/// List all categories
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List of categories", body = Vec<Category>),
    ),
    tag = "reference-data"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<Vec<Category>>> {
    let categories = service.list().await?;
    Ok(Json(categories))
}
