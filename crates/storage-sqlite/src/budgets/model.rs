//! Database models for budgets.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use budgetwise_core::budgets::Budget;

use crate::utils::parse_decimal_column;

/// Database model for budgets. Money columns are TEXT so SQLite never does
/// float arithmetic on them.
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Serialize,
    Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::budgets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BudgetDB {
    pub id: String,
    pub user_id: String,
    pub budget_name: String,
    pub total_income: String,
    pub needs_budget: String,
    pub wants_budget: String,
    pub savings_budget: String,
    pub month_year: Option<String>,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

impl From<BudgetDB> for Budget {
    fn from(db: BudgetDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            budget_name: db.budget_name,
            total_income: parse_decimal_column(&db.total_income, "total_income"),
            needs_budget: parse_decimal_column(&db.needs_budget, "needs_budget"),
            wants_budget: parse_decimal_column(&db.wants_budget, "wants_budget"),
            savings_budget: parse_decimal_column(&db.savings_budget, "savings_budget"),
            month_year: db.month_year,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<Budget> for BudgetDB {
    fn from(domain: Budget) -> Self {
        Self {
            id: domain.id,
            user_id: domain.user_id,
            budget_name: domain.budget_name,
            total_income: domain.total_income.to_string(),
            needs_budget: domain.needs_budget.to_string(),
            wants_budget: domain.wants_budget.to_string(),
            savings_budget: domain.savings_budget.to_string(),
            month_year: domain.month_year,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}
