use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use budgetwise_core::budgets::{Budget, BudgetRepositoryTrait};
use budgetwise_core::Result;

use super::model::BudgetDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::budgets;

pub struct BudgetRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl BudgetRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl BudgetRepositoryTrait for BudgetRepository {
    fn get_by_user(&self, user_id: &str) -> Result<Option<Budget>> {
        let mut conn = get_connection(&self.pool)?;
        let budget_db = budgets::table
            .filter(budgets::user_id.eq(user_id))
            .order(budgets::created_at.desc())
            .first::<BudgetDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(budget_db.map(Budget::from))
    }

    async fn replace_for_user(&self, budget: Budget) -> Result<Budget> {
        let budget_db = BudgetDB::from(budget);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Budget> {
                // The writer wraps this job in one immediate transaction, so
                // the delete and insert land together or not at all.
                diesel::delete(budgets::table.filter(budgets::user_id.eq(&budget_db.user_id)))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                let inserted = diesel::insert_into(budgets::table)
                    .values(&budget_db)
                    .returning(BudgetDB::as_returning())
                    .get_result::<BudgetDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Budget::from(inserted))
            })
            .await
    }

    async fn delete_for_user(&self, user_id: &str) -> Result<usize> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(
                    diesel::delete(budgets::table.filter(budgets::user_id.eq(&user_id)))
                        .execute(conn)
                        .map_err(StorageError::from)?,
                )
            })
            .await
    }
}
