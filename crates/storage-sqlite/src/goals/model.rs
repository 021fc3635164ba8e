//! Database models for goals.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use budgetwise_core::goals::Goal;

use crate::utils::parse_decimal_column;

/// Database model for goals
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Serialize,
    Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GoalDB {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub required_amount: String,
    pub accumulated_amount: String,
    pub goal_percentage: String,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

impl From<GoalDB> for Goal {
    fn from(db: GoalDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            name: db.name,
            required_amount: parse_decimal_column(&db.required_amount, "required_amount"),
            accumulated_amount: parse_decimal_column(&db.accumulated_amount, "accumulated_amount"),
            goal_percentage: parse_decimal_column(&db.goal_percentage, "goal_percentage"),
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<Goal> for GoalDB {
    fn from(domain: Goal) -> Self {
        Self {
            id: domain.id,
            user_id: domain.user_id,
            name: domain.name,
            required_amount: domain.required_amount.to_string(),
            accumulated_amount: domain.accumulated_amount.to_string(),
            goal_percentage: domain.goal_percentage.to_string(),
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}
