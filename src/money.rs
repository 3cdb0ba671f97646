//! Rupiah display convention. Amounts are whole rupiah, grouped with dots
//! and shown without decimals.

use crate::errors::{StoreError, StoreResult};

const GROUPING_SEPARATOR: char = '.';

/// Magnitude rendering, "Rp 50.000". The sign is a presentation concern
/// handled by [`format_signed`] or by the caller's colour/label choice.
pub fn format_amount(amount: i64) -> String {
    format!("Rp {}", group_digits(&amount.unsigned_abs().to_string()))
}

/// Signed rendering used by totals: "+Rp 100.000", "-Rp 50.000". Zero is
/// shown with a plus.
pub fn format_signed(amount: i64) -> String {
    let sign = if amount < 0 { '-' } else { '+' };
    format!("{}{}", sign, format_amount(amount))
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, GROUPING_SEPARATOR);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}

/// Digit-only normalization of user input, the way the capture form cleans
/// it: every non-digit character is dropped, so "50.000", "50,000" and
/// "Rp 50000" all parse to 50000. The result is a magnitude; the stored
/// sign comes from the transaction kind.
pub fn parse_amount(raw: &str) -> StoreResult<i64> {
    let digits: String = raw.chars().filter(|ch| ch.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(StoreError::Validation(format!(
            "No digits in amount: {raw:?}"
        )));
    }
    digits
        .parse::<i64>()
        .map_err(|_| StoreError::Validation(format!("Amount out of range: {raw:?}")))
}
