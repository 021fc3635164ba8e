use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use budgetwise_core::categories::PriorityType;
use budgetwise_core::spending::{
    ReportingPeriod, SpendRecord, SpendTotals, SpendingRepositoryTrait,
};
use budgetwise_core::utils::validate_id;
use budgetwise_core::Result;

use super::model::SpendRecordDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{categories, spend_records};
use crate::utils::parse_decimal_column;

/// Repository over spend records. The budgeting engine only reads them;
/// `insert` is the entry point for the transaction-recording collaborator.
pub struct SpendingRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SpendingRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }

    pub async fn insert(&self, record: SpendRecord) -> Result<SpendRecord> {
        let record_db = SpendRecordDB::from(record);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<SpendRecord> {
                let inserted = diesel::insert_into(spend_records::table)
                    .values(&record_db)
                    .returning(SpendRecordDB::as_returning())
                    .get_result::<SpendRecordDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(SpendRecord::from(inserted))
            })
            .await
    }
}

#[async_trait]
impl SpendingRepositoryTrait for SpendingRepository {
    async fn sum_by_priority(
        &self,
        user_id: &str,
        period: Option<&ReportingPeriod>,
    ) -> Result<SpendTotals> {
        validate_id(user_id)?;
        let mut conn = get_connection(&self.pool)?;

        // Join each record to its category's priority class in SQL, then
        // fold per-priority buckets; the per-category grouping never
        // surfaces.
        let mut query = spend_records::table
            .inner_join(categories::table)
            .filter(spend_records::user_id.eq(user_id))
            .into_boxed();
        if let Some(period) = period {
            query = query
                .filter(spend_records::created_at.ge(period.start))
                .filter(spend_records::created_at.lt(period.end));
        }
        let rows = query
            .select((categories::priority_type, spend_records::amount))
            .load::<(String, String)>(&mut conn)
            .map_err(StorageError::from)?;

        let mut totals = SpendTotals::default();
        for (priority, amount) in rows {
            totals.add(
                PriorityType::from_str(&priority)?,
                parse_decimal_column(&amount, "amount"),
            );
        }
        Ok(totals)
    }

    fn list_for_user(&self, user_id: &str) -> Result<Vec<SpendRecord>> {
        let mut conn = get_connection(&self.pool)?;
        let records_db = spend_records::table
            .filter(spend_records::user_id.eq(user_id))
            .order(spend_records::created_at.desc())
            .load::<SpendRecordDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(records_db.into_iter().map(SpendRecord::from).collect())
    }
}
