//! Income allocation: splits declared income into needs/wants/savings.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::errors::{Result, ValidationError};

/// Allocation ratios applied to declared income. Passed to the budget
/// service at construction so tests can pin them explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AllocationRatios {
    pub needs: Decimal,
    pub wants: Decimal,
    pub savings: Decimal,
}

impl AllocationRatios {
    /// The 50/30/20 rule.
    pub fn fifty_thirty_twenty() -> Self {
        Self {
            needs: dec!(0.50),
            wants: dec!(0.30),
            savings: dec!(0.20),
        }
    }

    /// Ratios must be non-negative and sum to exactly 1.
    pub fn validate(&self) -> Result<()> {
        if self.needs < Decimal::ZERO || self.wants < Decimal::ZERO || self.savings < Decimal::ZERO
        {
            return Err(
                ValidationError::InvalidInput("allocation ratios cannot be negative".to_string())
                    .into(),
            );
        }
        if self.needs + self.wants + self.savings != Decimal::ONE {
            return Err(ValidationError::InvalidInput(format!(
                "allocation ratios must sum to 1, got {}",
                self.needs + self.wants + self.savings
            ))
            .into());
        }
        Ok(())
    }
}

impl Default for AllocationRatios {
    fn default() -> Self {
        Self::fifty_thirty_twenty()
    }
}

/// The needs/wants/savings split of a total income figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncomeAllocation {
    pub needs: Decimal,
    pub wants: Decimal,
    pub savings: Decimal,
}

fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

/// Splits `total_income` by the given ratios, rounding each bucket to two
/// decimal places. The three outputs sum to `total_income` within one
/// rounding unit (0.01). Rejects negative income.
pub fn split_income(total_income: Decimal, ratios: &AllocationRatios) -> Result<IncomeAllocation> {
    if total_income < Decimal::ZERO {
        return Err(
            ValidationError::InvalidInput("total_income cannot be negative".to_string()).into(),
        );
    }

    Ok(IncomeAllocation {
        needs: round_money(total_income * ratios.needs),
        wants: round_money(total_income * ratios.wants),
        savings: round_money(total_income * ratios.savings),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_income_by_the_fifty_thirty_twenty_rule() {
        let allocation = split_income(dec!(1000), &AllocationRatios::default()).unwrap();
        assert_eq!(allocation.needs, dec!(500.00));
        assert_eq!(allocation.wants, dec!(300.00));
        assert_eq!(allocation.savings, dec!(200.00));
    }

    #[test]
    fn rejects_negative_income() {
        assert!(split_income(dec!(-0.01), &AllocationRatios::default()).is_err());
    }

    #[test]
    fn zero_income_splits_to_zeroes() {
        let allocation = split_income(Decimal::ZERO, &AllocationRatios::default()).unwrap();
        assert_eq!(allocation.needs, Decimal::ZERO);
        assert_eq!(allocation.wants, Decimal::ZERO);
        assert_eq!(allocation.savings, Decimal::ZERO);
    }

    #[test]
    fn is_deterministic() {
        let ratios = AllocationRatios::default();
        let first = split_income(dec!(1234.56), &ratios).unwrap();
        let second = split_income(dec!(1234.56), &ratios).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rounds_to_cents_with_midpoint_away_from_zero() {
        // 33.33 * 0.5 = 16.665 -> 16.67, not 16.66
        let allocation = split_income(dec!(33.33), &AllocationRatios::default()).unwrap();
        assert_eq!(allocation.needs, dec!(16.67));
    }

    #[test]
    fn buckets_sum_to_income_within_a_cent() {
        let ratios = AllocationRatios::default();
        for income in [
            dec!(0),
            dec!(0.01),
            dec!(1),
            dec!(33.33),
            dec!(999.99),
            dec!(1000),
            dec!(2500.55),
            dec!(123456.78),
        ] {
            let allocation = split_income(income, &ratios).unwrap();
            let sum = allocation.needs + allocation.wants + allocation.savings;
            assert!(
                (sum - income).abs() <= dec!(0.01),
                "split of {} summed to {}",
                income,
                sum
            );
        }
    }

    #[test]
    fn ratio_validation_catches_bad_sums() {
        let ratios = AllocationRatios {
            needs: dec!(0.5),
            wants: dec!(0.5),
            savings: dec!(0.5),
        };
        assert!(ratios.validate().is_err());
        assert!(AllocationRatios::default().validate().is_ok());
    }
}
