//! Database models for categories.

use std::str::FromStr;

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use budgetwise_core::categories::{Category, PriorityType};
use budgetwise_core::errors::Error;

/// Database model for categories
#[derive(
    Queryable, Identifiable, Insertable, AsChangeset, Selectable, PartialEq, Serialize,
    Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CategoryDB {
    pub id: String,
    pub category_name: String,
    pub priority_type: String,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

// A priority outside the CHECK'd enum means the row was tampered with;
// surface it instead of misclassifying spend.
impl TryFrom<CategoryDB> for Category {
    type Error = Error;

    fn try_from(db: CategoryDB) -> Result<Self, Self::Error> {
        Ok(Self {
            id: db.id,
            category_name: db.category_name,
            priority_type: PriorityType::from_str(&db.priority_type)?,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

impl From<Category> for CategoryDB {
    fn from(domain: Category) -> Self {
        Self {
            id: domain.id,
            category_name: domain.category_name,
            priority_type: domain.priority_type.as_str().to_string(),
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}
