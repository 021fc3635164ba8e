use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use uuid::Uuid;

use budgetwise_core::categories::{Category, CategoryRepositoryTrait, NewCategory};
use budgetwise_core::Result;

use super::model::CategoryDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::categories;

pub struct CategoryRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CategoryRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl CategoryRepositoryTrait for CategoryRepository {
    fn get_by_id(&self, category_id: &str) -> Result<Category> {
        let mut conn = get_connection(&self.pool)?;
        let category_db = categories::table
            .find(category_id)
            .first::<CategoryDB>(&mut conn)
            .map_err(StorageError::from)?;
        Category::try_from(category_db)
    }

    fn find_by_name(&self, category_name: &str) -> Result<Option<Category>> {
        let mut conn = get_connection(&self.pool)?;
        let category_db = categories::table
            .filter(categories::category_name.eq(category_name))
            .first::<CategoryDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        category_db.map(Category::try_from).transpose()
    }

    fn list(&self) -> Result<Vec<Category>> {
        let mut conn = get_connection(&self.pool)?;
        let categories_db = categories::table
            .order(categories::category_name.asc())
            .load::<CategoryDB>(&mut conn)
            .map_err(StorageError::from)?;
        categories_db.into_iter().map(Category::try_from).collect()
    }

    async fn create(&self, new_category: NewCategory) -> Result<Category> {
        let now = Utc::now().naive_utc();
        let category_db = CategoryDB {
            id: Uuid::new_v4().to_string(),
            category_name: new_category.category_name,
            priority_type: new_category.priority_type.as_str().to_string(),
            created_at: now,
            updated_at: now,
        };
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Category> {
                let inserted = diesel::insert_into(categories::table)
                    .values(&category_db)
                    .returning(CategoryDB::as_returning())
                    .get_result::<CategoryDB>(conn)
                    .map_err(StorageError::from)?;
                Category::try_from(inserted)
            })
            .await
    }
}
