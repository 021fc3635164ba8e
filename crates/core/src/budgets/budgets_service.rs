use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, error};
use uuid::Uuid;

use crate::budgets::allocator::{split_income, AllocationRatios};
use crate::budgets::budgets_model::{Budget, BudgetSummary, NewBudget};
use crate::budgets::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::budgets::metrics::BudgetMetrics;
use crate::constants::MONTH_YEAR_FORMAT;
use crate::errors::{Error, Result};
use crate::goals::GoalServiceTrait;
use crate::spending::{ReportingPeriod, SpendingRepositoryTrait};
use crate::utils::validate_id;

/// Owns the budget lifecycle: create/replace on write, enriched summary on
/// read, delete on request.
///
/// Per user the state machine is `NoBudget -> Active`; a create from either
/// state leaves exactly one budget reflecting the latest call.
pub struct BudgetService {
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
    spending_repository: Arc<dyn SpendingRepositoryTrait>,
    goal_service: Arc<dyn GoalServiceTrait>,
    ratios: AllocationRatios,
}

impl BudgetService {
    pub fn new(
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
        spending_repository: Arc<dyn SpendingRepositoryTrait>,
        goal_service: Arc<dyn GoalServiceTrait>,
        ratios: AllocationRatios,
    ) -> Result<Self> {
        ratios.validate()?;
        Ok(Self {
            budget_repository,
            spending_repository,
            goal_service,
            ratios,
        })
    }

    fn reporting_period(budget: &Budget) -> Result<Option<ReportingPeriod>> {
        budget
            .month_year
            .as_deref()
            .map(ReportingPeriod::from_month_year)
            .transpose()
    }
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    async fn create_budget(&self, user_id: &str, new_budget: NewBudget) -> Result<Budget> {
        validate_id(user_id)?;
        let allocation = split_income(new_budget.total_income, &self.ratios)?;

        let now = Utc::now();
        let budget = Budget {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            budget_name: new_budget.budget_name,
            total_income: new_budget.total_income,
            needs_budget: allocation.needs,
            wants_budget: allocation.wants,
            savings_budget: allocation.savings,
            month_year: Some(now.format(MONTH_YEAR_FORMAT).to_string()),
            created_at: now.naive_utc(),
            updated_at: now.naive_utc(),
        };

        debug!(
            "Replacing budget for user {} with '{}' (income {})",
            user_id, budget.budget_name, budget.total_income
        );
        self.budget_repository.replace_for_user(budget).await
    }

    async fn get_budget_summary(&self, user_id: &str) -> Result<Option<BudgetSummary>> {
        validate_id(user_id)?;

        let budget = match self.budget_repository.get_by_user(user_id)? {
            Some(budget) => budget,
            None => return Ok(None),
        };
        let period = Self::reporting_period(&budget)?;

        // Both aggregations must land before metrics; either failure aborts
        // the read instead of reporting zeroed metrics.
        let spend = async {
            self.spending_repository
                .sum_by_priority(user_id, period.as_ref())
                .await
                .map_err(|e| {
                    error!("Spend aggregation failed for user {}: {}", user_id, e);
                    Error::Aggregation(format!("spend aggregation failed: {}", e))
                })
        };
        let savings = async {
            self.goal_service.total_accumulated(user_id).map_err(|e| {
                error!("Goal aggregation failed for user {}: {}", user_id, e);
                Error::Aggregation(format!("goal aggregation failed: {}", e))
            })
        };
        let (spent, accumulated_savings) = tokio::try_join!(spend, savings)?;

        let metrics = BudgetMetrics::compute(
            &budget.allocation(),
            budget.total_income,
            &spent,
            accumulated_savings,
        );
        Ok(Some(BudgetSummary { budget, metrics }))
    }

    async fn delete_budget(&self, user_id: &str) -> Result<usize> {
        validate_id(user_id)?;
        let deleted = self.budget_repository.delete_for_user(user_id).await?;
        if deleted == 0 {
            return Err(Error::NotFound("Budget".to_string()));
        }
        Ok(deleted)
    }
}
