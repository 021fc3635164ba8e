//! Pure metrics computation over a budget's allocation, aggregated spend,
//! and accumulated savings.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::budgets::allocator::IncomeAllocation;
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::spending::SpendTotals;

/// Computed spend/savings metrics reported alongside a budget.
///
/// Displayed percentages are capped at 100; the `is_*_over_available_balance`
/// flags reflect the uncapped ratio, so a capped 100% with the flag set
/// means the bucket is overspent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetMetrics {
    pub needs_spent_amount: Decimal,
    pub wants_spent_amount: Decimal,
    pub savings_amount: Decimal,
    pub needs_spent_percent: Decimal,
    pub wants_spent_percent: Decimal,
    pub savings_percentage: Decimal,
    pub is_needs_over_available_balance: bool,
    pub is_wants_over_available_balance: bool,
    pub is_savings_over_available_balance: bool,
    pub is_total_income_exceeded: bool,
}

/// Capped display percentage plus the uncapped overage flag for one bucket.
/// A zero allocation reports 0% and can never be over.
fn spent_ratio(amount: Decimal, allocation: Decimal) -> (Decimal, bool) {
    if allocation.is_zero() {
        return (Decimal::ZERO, false);
    }
    let raw_percent = amount / allocation * dec!(100);
    let displayed = raw_percent
        .min(dec!(100))
        .round_dp(DISPLAY_DECIMAL_PRECISION);
    (displayed, raw_percent > dec!(100))
}

impl BudgetMetrics {
    /// Pure function of its inputs; performs no I/O and never divides by zero.
    ///
    /// `is_total_income_exceeded` compares expenditure (needs + wants) against
    /// income; accumulated savings is not expenditure and is excluded.
    pub fn compute(
        allocation: &IncomeAllocation,
        total_income: Decimal,
        spent: &SpendTotals,
        accumulated_savings: Decimal,
    ) -> Self {
        let (needs_spent_percent, is_needs_over) =
            spent_ratio(spent.needs_spent, allocation.needs);
        let (wants_spent_percent, is_wants_over) =
            spent_ratio(spent.wants_spent, allocation.wants);
        let (savings_percentage, is_savings_over) =
            spent_ratio(accumulated_savings, allocation.savings);

        BudgetMetrics {
            needs_spent_amount: spent.needs_spent,
            wants_spent_amount: spent.wants_spent,
            savings_amount: accumulated_savings,
            needs_spent_percent,
            wants_spent_percent,
            savings_percentage,
            is_needs_over_available_balance: is_needs_over,
            is_wants_over_available_balance: is_wants_over,
            is_savings_over_available_balance: is_savings_over,
            is_total_income_exceeded: spent.total() > total_income,
        }
    }
}
