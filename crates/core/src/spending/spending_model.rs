//! Spend record domain models and aggregation buckets.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::categories::PriorityType;
use crate::constants::MONTH_YEAR_FORMAT;
use crate::errors::{Result, ValidationError};

/// A single categorized expense. Written by the transaction-recording
/// collaborator; read-only to the budgeting engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpendRecord {
    pub id: String,
    pub user_id: String,
    pub category_id: String,
    pub amount: Decimal,
    pub created_at: NaiveDateTime,
}

/// Half-open reporting window `[start, end)` used to scope spend
/// aggregation, typically one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingPeriod {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ReportingPeriod {
    /// The calendar month containing `date`.
    pub fn month_of(date: NaiveDate) -> Self {
        let start = date.with_day(1).expect("day 1 is always valid");
        let end = if start.month() == 12 {
            NaiveDate::from_ymd_opt(start.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(start.year(), start.month() + 1, 1)
        }
        .expect("first of month is always valid");
        Self {
            start: start.and_hms_opt(0, 0, 0).expect("midnight is valid"),
            end: end.and_hms_opt(0, 0, 0).expect("midnight is valid"),
        }
    }

    /// Parses a "YYYY-MM" label into the month window it names.
    pub fn from_month_year(label: &str) -> Result<Self> {
        let date = NaiveDate::parse_from_str(&format!("{}-01", label), "%Y-%m-%d")
            .map_err(|_| {
                ValidationError::InvalidInput(format!(
                    "month_year '{}' is not in {} format",
                    label, MONTH_YEAR_FORMAT
                ))
            })?;
        Ok(Self::month_of(date))
    }

    pub fn contains(&self, at: NaiveDateTime) -> bool {
        at >= self.start && at < self.end
    }
}

/// Spend amounts bucketed by priority class.
///
/// `saving`-classified spend is deliberately absent: savings progress is
/// sourced from goals, not from spend records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpendTotals {
    pub needs_spent: Decimal,
    pub wants_spent: Decimal,
}

impl SpendTotals {
    /// Folds one joined (priority, amount) row into its bucket.
    ///
    /// Shared by every repository implementation so that grouping stays a
    /// join-then-group-by, not a per-category sum.
    pub fn add(&mut self, priority: PriorityType, amount: Decimal) {
        match priority {
            PriorityType::Need => self.needs_spent += amount,
            PriorityType::Want => self.wants_spent += amount,
            PriorityType::Saving => {}
        }
    }

    pub fn total(&self) -> Decimal {
        self.needs_spent + self.wants_spent
    }
}
