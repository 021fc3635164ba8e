use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalsStats};

/// Trait for goal repository operations
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Goal>>;
    fn get_by_id(&self, goal_id: &str) -> Result<Goal>;
    async fn insert(&self, goal: Goal) -> Result<Goal>;
    async fn update_accumulated(
        &self,
        goal_id: &str,
        accumulated_amount: Decimal,
        goal_percentage: Decimal,
    ) -> Result<Goal>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self, user_id: &str) -> Result<Vec<Goal>>;
    fn get_goal(&self, user_id: &str, goal_id: &str) -> Result<Goal>;
    async fn create_goal(&self, user_id: &str, new_goal: crate::goals::NewGoal) -> Result<Goal>;
    async fn update_accumulated(
        &self,
        user_id: &str,
        goal_id: &str,
        accumulated_amount: Decimal,
    ) -> Result<Goal>;
    fn get_goals_stats(&self, user_id: &str) -> Result<GoalsStats>;

    /// Total accumulated savings across all of the user's goals.
    /// Zero goals is not an error; it sums to zero.
    fn total_accumulated(&self, user_id: &str) -> Result<Decimal>;
}
