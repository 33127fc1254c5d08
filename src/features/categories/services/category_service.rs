use std::sync::Arc;

use crate::core::error::Result;
use crate::features::categories::models::Category;
use crate::features::categories::repository::CategoryRepository;

/// Service for category reference data
pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    pub async fn list(&self) -> Result<Vec<Category>> {
        self.categories.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::categories::repository::SqliteCategoryRepository;
    use crate::shared::test_helpers::seeded_pool;

    #[tokio::test]
    async fn lists_seeded_categories() {
        let pool = seeded_pool().await;
        let service = CategoryService::new(Arc::new(SqliteCategoryRepository::new(pool)));

        let categories = service.list().await.unwrap();
        assert_eq!(categories.len(), 8);
        assert!(categories.iter().any(|c| c.slug == "hotels-hebergement"));
    }
}
