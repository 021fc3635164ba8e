use async_trait::async_trait;

use crate::errors::Result;
use crate::spending::spending_model::{ReportingPeriod, SpendRecord, SpendTotals};

/// Trait for spend record repository operations.
///
/// The engine never writes spend records; `sum_by_priority` is the
/// aggregation contract of the read path. Implementations must join each
/// record to its category's priority class and sum per bucket (relational
/// `JOIN` + `GROUP BY` semantics), honoring the optional `[start, end)`
/// window.
#[async_trait]
pub trait SpendingRepositoryTrait: Send + Sync {
    async fn sum_by_priority(
        &self,
        user_id: &str,
        period: Option<&ReportingPeriod>,
    ) -> Result<SpendTotals>;

    fn list_for_user(&self, user_id: &str) -> Result<Vec<SpendRecord>>;
}
