//! Shared helpers for database model conversions.

use std::str::FromStr;

use log::error;
use rust_decimal::Decimal;

/// Parses a TEXT money column back into a Decimal, falling back to zero on
/// rows that predate the current serialization. The fallback is logged.
pub(crate) fn parse_decimal_column(value_str: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value_str) {
        Ok(d) => d,
        Err(e) => {
            error!(
                "Failed to parse {} '{}' as Decimal: {}. Falling back to ZERO.",
                field_name, value_str, e
            );
            Decimal::ZERO
        }
    }
}
