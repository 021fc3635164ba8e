//! Category domain models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, ValidationError};

/// Priority class of a category. Drives which aggregation bucket the
/// category's spend falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityType {
    Need,
    Want,
    Saving,
}

impl PriorityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityType::Need => "need",
            PriorityType::Want => "want",
            PriorityType::Saving => "saving",
        }
    }
}

impl fmt::Display for PriorityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriorityType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "need" => Ok(PriorityType::Need),
            "want" => Ok(PriorityType::Want),
            "saving" => Ok(PriorityType::Saving),
            other => Err(ValidationError::InvalidInput(format!(
                "unknown priority type '{}'",
                other
            ))
            .into()),
        }
    }
}

/// Domain model representing a spending category. Reference data shared by
/// all users; many spend records reference one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: String,
    pub category_name: String,
    pub priority_type: PriorityType,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCategory {
    pub category_name: String,
    pub priority_type: PriorityType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_type_round_trips_through_str() {
        for p in [PriorityType::Need, PriorityType::Want, PriorityType::Saving] {
            assert_eq!(PriorityType::from_str(p.as_str()).unwrap(), p);
        }
    }

    #[test]
    fn unknown_priority_type_is_rejected() {
        assert!(PriorityType::from_str("luxury").is_err());
    }
}
