//! Goals domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain model representing a savings goal.
///
/// `accumulated_amount` is the user's progress to date and doubles as the
/// realized-savings figure in budget metrics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub required_amount: Decimal,
    pub accumulated_amount: Decimal,
    pub goal_percentage: Decimal,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGoal {
    pub name: String,
    pub required_amount: Decimal,
    #[serde(default)]
    pub accumulated_amount: Decimal,
}

/// Completion statistics across a user's goals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalsStats {
    pub total_goals: usize,
    pub completed_goals: usize,
    pub completion_percentage: Decimal,
}
