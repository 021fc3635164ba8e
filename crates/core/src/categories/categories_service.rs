use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::categories::categories_model::{Category, NewCategory, PriorityType};
use crate::categories::categories_traits::{CategoryRepositoryTrait, CategoryServiceTrait};
use crate::errors::Result;
use crate::utils::validate_id;

/// Service for category reference data.
///
/// Classification is a pure read; spend aggregation relies on it to bucket
/// records without embedding priority logic in the aggregator.
pub struct CategoryService {
    category_repository: Arc<dyn CategoryRepositoryTrait>,
}

impl CategoryService {
    pub fn new(category_repository: Arc<dyn CategoryRepositoryTrait>) -> Self {
        Self {
            category_repository,
        }
    }
}

#[async_trait]
impl CategoryServiceTrait for CategoryService {
    fn classify(&self, category_id: &str) -> Result<PriorityType> {
        validate_id(category_id)?;
        let category = self.category_repository.get_by_id(category_id)?;
        Ok(category.priority_type)
    }

    fn get_category(&self, category_id: &str) -> Result<Category> {
        validate_id(category_id)?;
        self.category_repository.get_by_id(category_id)
    }

    fn get_categories(&self) -> Result<Vec<Category>> {
        self.category_repository.list()
    }

    async fn create_category(&self, new_category: NewCategory) -> Result<Category> {
        if let Some(existing) = self
            .category_repository
            .find_by_name(&new_category.category_name)?
        {
            return Err(crate::errors::Error::AlreadyExists(format!(
                "Category '{}'",
                existing.category_name
            )));
        }
        debug!("Creating category '{}'", new_category.category_name);
        self.category_repository.create(new_category).await
    }
}
