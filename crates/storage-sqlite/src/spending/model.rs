//! Database models for spend records.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use budgetwise_core::spending::SpendRecord;

use crate::utils::parse_decimal_column;

/// Database model for spend records
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::spend_records)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SpendRecordDB {
    pub id: String,
    pub user_id: String,
    pub category_id: String,
    pub amount: String,
    pub created_at: chrono::NaiveDateTime,
}

impl From<SpendRecordDB> for SpendRecord {
    fn from(db: SpendRecordDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            category_id: db.category_id,
            amount: parse_decimal_column(&db.amount, "amount"),
            created_at: db.created_at,
        }
    }
}

impl From<SpendRecord> for SpendRecordDB {
    fn from(domain: SpendRecord) -> Self {
        Self {
            id: domain.id,
            user_id: domain.user_id,
            category_id: domain.category_id,
            amount: domain.amount.to_string(),
            created_at: domain.created_at,
        }
    }
}
