//! Formatting helpers for integer minor-unit (cents) amounts.
//!
//! The expense trackers store and transmit amounts as integer cents; display
//! formatting divides by 100. Portfolio values use `rust_decimal::Decimal`
//! and are formatted by the callers directly.

use crate::constants::CENTS_PER_UNIT;

/// Formats an amount in cents as a plain decimal string, e.g. `1234 -> "12.34"`.
///
/// Negative amounts keep the sign in front of the whole part: `-5 -> "-0.05"`.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let units = abs / CENTS_PER_UNIT as u64;
    let rem = abs % CENTS_PER_UNIT as u64;
    format!("{}{}.{:02}", sign, units, rem)
}
