use async_trait::async_trait;

use crate::categories::categories_model::{Category, NewCategory, PriorityType};
use crate::errors::Result;

/// Trait for category repository operations
#[async_trait]
pub trait CategoryRepositoryTrait: Send + Sync {
    fn get_by_id(&self, category_id: &str) -> Result<Category>;
    fn find_by_name(&self, category_name: &str) -> Result<Option<Category>>;
    fn list(&self) -> Result<Vec<Category>>;
    async fn create(&self, new_category: NewCategory) -> Result<Category>;
}

/// Trait for category service operations
#[async_trait]
pub trait CategoryServiceTrait: Send + Sync {
    /// Resolves a category to its priority class.
    fn classify(&self, category_id: &str) -> Result<PriorityType>;
    fn get_category(&self, category_id: &str) -> Result<Category>;
    fn get_categories(&self) -> Result<Vec<Category>>;
    async fn create_category(&self, new_category: NewCategory) -> Result<Category>;
}
