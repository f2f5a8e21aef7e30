/// Days used to derive the daily fee rate from an annual fee percentage.
pub const FEE_DAYS_PER_YEAR: i64 = 365;

/// Minor units (cents) per currency unit for the expense trackers.
pub const CENTS_PER_UNIT: i64 = 100;
