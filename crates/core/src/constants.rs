/// Decimal precision for money amounts and display percentages
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Format of the `month_year` budget label (e.g. "2026-08")
pub const MONTH_YEAR_FORMAT: &str = "%Y-%m";
