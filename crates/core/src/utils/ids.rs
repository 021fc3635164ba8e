//! Identifier validation helpers.

use uuid::Uuid;

use crate::errors::{Result, ValidationError};

/// Checks that an identifier supplied by a caller is a well-formed UUID.
///
/// Identity itself is established upstream; the engine only rejects
/// malformed identifiers before they reach a query.
pub fn validate_id(id: &str) -> Result<()> {
    Uuid::parse_str(id)
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidInput(format!("invalid identifier '{}'", id)).into())
}
