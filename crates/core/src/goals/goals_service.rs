use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::{Error, Result, ValidationError};
use crate::goals::goals_model::{Goal, GoalsStats, NewGoal};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::utils::validate_id;

fn percentage_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    (part / whole * dec!(100)).round_dp(DISPLAY_DECIMAL_PRECISION)
}

/// Service managing savings goals and exposing the accumulated-savings
/// figure consumed by budget metrics.
pub struct GoalService {
    goal_repository: Arc<dyn GoalRepositoryTrait>,
}

impl GoalService {
    pub fn new(goal_repository: Arc<dyn GoalRepositoryTrait>) -> Self {
        Self { goal_repository }
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    fn get_goals(&self, user_id: &str) -> Result<Vec<Goal>> {
        validate_id(user_id)?;
        self.goal_repository.list_for_user(user_id)
    }

    fn get_goal(&self, user_id: &str, goal_id: &str) -> Result<Goal> {
        validate_id(user_id)?;
        validate_id(goal_id)?;
        let goal = self.goal_repository.get_by_id(goal_id)?;
        if goal.user_id != user_id {
            // Not revealing other users' goal ids: absent and foreign look alike.
            return Err(Error::NotFound("Goal".to_string()));
        }
        Ok(goal)
    }

    async fn create_goal(&self, user_id: &str, new_goal: NewGoal) -> Result<Goal> {
        validate_id(user_id)?;
        if new_goal.required_amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "required_amount must be greater than 0".to_string(),
            )
            .into());
        }
        if new_goal.accumulated_amount > new_goal.required_amount {
            return Err(ValidationError::InvalidInput(
                "accumulated_amount cannot exceed required_amount".to_string(),
            )
            .into());
        }
        if new_goal.accumulated_amount < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "accumulated_amount cannot be negative".to_string(),
            )
            .into());
        }

        let now = Utc::now().naive_utc();
        let goal = Goal {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            name: new_goal.name,
            required_amount: new_goal.required_amount,
            accumulated_amount: new_goal.accumulated_amount,
            goal_percentage: percentage_of(new_goal.accumulated_amount, new_goal.required_amount),
            created_at: now,
            updated_at: now,
        };
        debug!("Creating goal '{}' for user {}", goal.name, user_id);
        self.goal_repository.insert(goal).await
    }

    async fn update_accumulated(
        &self,
        user_id: &str,
        goal_id: &str,
        accumulated_amount: Decimal,
    ) -> Result<Goal> {
        validate_id(user_id)?;
        validate_id(goal_id)?;
        let goal = self.goal_repository.get_by_id(goal_id)?;
        if goal.user_id != user_id {
            return Err(Error::Forbidden(
                "user does not own this goal".to_string(),
            ));
        }
        if accumulated_amount < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "accumulated_amount cannot be negative".to_string(),
            )
            .into());
        }
        if accumulated_amount > goal.required_amount {
            return Err(ValidationError::InvalidInput(
                "accumulated_amount cannot exceed required_amount".to_string(),
            )
            .into());
        }

        let goal_percentage = percentage_of(accumulated_amount, goal.required_amount);
        self.goal_repository
            .update_accumulated(goal_id, accumulated_amount, goal_percentage)
            .await
    }

    fn get_goals_stats(&self, user_id: &str) -> Result<GoalsStats> {
        let goals = self.get_goals(user_id)?;
        let total_goals = goals.len();
        let completed_goals = goals
            .iter()
            .filter(|g| g.accumulated_amount >= g.required_amount)
            .count();
        let completion_percentage = if total_goals > 0 {
            percentage_of(Decimal::from(completed_goals as u64), Decimal::from(total_goals as u64))
        } else {
            Decimal::ZERO
        };
        Ok(GoalsStats {
            total_goals,
            completed_goals,
            completion_percentage,
        })
    }

    fn total_accumulated(&self, user_id: &str) -> Result<Decimal> {
        validate_id(user_id)?;
        let goals = self.goal_repository.list_for_user(user_id)?;
        Ok(goals.iter().map(|g| g.accumulated_amount).sum())
    }
}
