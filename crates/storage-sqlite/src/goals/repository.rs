use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use rust_decimal::Decimal;

use budgetwise_core::goals::{Goal, GoalRepositoryTrait};
use budgetwise_core::Result;

use super::model::GoalDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::goals;

pub struct GoalRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl GoalRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        let goals_db = goals::table
            .filter(goals::user_id.eq(user_id))
            .order(goals::created_at.asc())
            .load::<GoalDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(goals_db.into_iter().map(Goal::from).collect())
    }

    fn get_by_id(&self, goal_id: &str) -> Result<Goal> {
        let mut conn = get_connection(&self.pool)?;
        let goal_db = goals::table
            .find(goal_id)
            .first::<GoalDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Goal::from(goal_db))
    }

    async fn insert(&self, goal: Goal) -> Result<Goal> {
        let goal_db = GoalDB::from(goal);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Goal> {
                let inserted = diesel::insert_into(goals::table)
                    .values(&goal_db)
                    .returning(GoalDB::as_returning())
                    .get_result::<GoalDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Goal::from(inserted))
            })
            .await
    }

    async fn update_accumulated(
        &self,
        goal_id: &str,
        accumulated_amount: Decimal,
        goal_percentage: Decimal,
    ) -> Result<Goal> {
        let goal_id = goal_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Goal> {
                let updated = diesel::update(goals::table.find(&goal_id))
                    .set((
                        goals::accumulated_amount.eq(accumulated_amount.to_string()),
                        goals::goal_percentage.eq(goal_percentage.to_string()),
                        goals::updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .returning(GoalDB::as_returning())
                    .get_result::<GoalDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Goal::from(updated))
            })
            .await
    }
}
