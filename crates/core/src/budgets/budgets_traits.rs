use async_trait::async_trait;

use crate::budgets::budgets_model::{Budget, BudgetSummary, NewBudget};
use crate::errors::Result;

/// Trait for budget repository operations
#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    fn get_by_user(&self, user_id: &str) -> Result<Option<Budget>>;

    /// Deletes every budget the user owns and inserts `budget`, as one
    /// atomic unit. An observer sees the previous budget or the new one,
    /// never neither.
    async fn replace_for_user(&self, budget: Budget) -> Result<Budget>;

    /// Removes all budgets for the user, returning how many existed.
    async fn delete_for_user(&self, user_id: &str) -> Result<usize>;
}

/// Trait for budget service operations
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    async fn create_budget(&self, user_id: &str, new_budget: NewBudget) -> Result<Budget>;

    /// `Ok(None)` when the user has no budget; errors are reserved for
    /// validation and store failures.
    async fn get_budget_summary(&self, user_id: &str) -> Result<Option<BudgetSummary>>;

    async fn delete_budget(&self, user_id: &str) -> Result<usize>;
}
