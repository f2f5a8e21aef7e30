//! Helpers shared by the storage models.
//!
//! Numeric columns holding `Decimal` values are stored as TEXT to avoid
//! floating-point drift; dates are stored as `YYYY-MM-DD` TEXT so range
//! filters can compare lexicographically.

use chrono::NaiveDate;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Storage format for `NaiveDate` columns.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a TEXT column into a Decimal, falling back through f64 for
/// scientific notation written by older clients.
pub(crate) fn parse_decimal_tolerant(value_str: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value_str) {
        Ok(d) => d,
        Err(e_decimal) => match f64::from_str(value_str).ok().and_then(Decimal::from_f64) {
            Some(d) => d,
            None => {
                log::error!(
                    "Failed to parse {} '{}' as Decimal ({}); falling back to ZERO",
                    field_name,
                    value_str,
                    e_decimal
                );
                Decimal::ZERO
            }
        },
    }
}

/// Parses a `YYYY-MM-DD` TEXT column into a `NaiveDate`.
pub(crate) fn parse_date_tolerant(value_str: &str, field_name: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value_str, DATE_FORMAT).unwrap_or_else(|e| {
        log::error!(
            "Failed to parse {} '{}' as date ({}); falling back to epoch",
            field_name,
            value_str,
            e
        );
        NaiveDate::default()
    })
}
