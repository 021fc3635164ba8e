//! Budget domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budgets::allocator::IncomeAllocation;
use crate::budgets::metrics::BudgetMetrics;

/// Domain model representing a user's budget.
///
/// Immutable value object: lifecycle transitions build a new record, the
/// stored row is only ever replaced wholesale or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub id: String,
    pub user_id: String,
    pub budget_name: String,
    pub total_income: Decimal,
    pub needs_budget: Decimal,
    pub wants_budget: Decimal,
    pub savings_budget: Decimal,
    /// "YYYY-MM" label of the month the budget was declared for. Doubles
    /// as the reporting window for spend aggregation when present.
    pub month_year: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Budget {
    pub fn allocation(&self) -> IncomeAllocation {
        IncomeAllocation {
            needs: self.needs_budget,
            wants: self.wants_budget,
            savings: self.savings_budget,
        }
    }
}

/// Input model for creating a budget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBudget {
    pub budget_name: String,
    pub total_income: Decimal,
}

/// A budget enriched with computed spend and savings metrics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetSummary {
    #[serde(flatten)]
    pub budget: Budget,
    #[serde(flatten)]
    pub metrics: BudgetMetrics,
}
