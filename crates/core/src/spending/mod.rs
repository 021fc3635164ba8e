//! Spending module - spend records and priority-bucketed aggregation.

mod spending_model;
mod spending_traits;

pub use spending_model::{ReportingPeriod, SpendRecord, SpendTotals};
pub use spending_traits::SpendingRepositoryTrait;
