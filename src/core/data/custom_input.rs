//! Parsing of user-supplied value lists.
//!
//! Items are read with leading-integer semantics: surrounding whitespace is
//! ignored, an optional sign is accepted and digits are consumed until the
//! first non-digit. `"12abc"` reads as 12 and `"3.9"` as 3. Items without a
//! leading integer, and integers that are not positive, are dropped.

pub const MAX_CUSTOM_VALUE: u32 = 300;

/// Splits comma separated text into the items [`parse_custom_values`] reads.
#[must_use]
pub fn split_custom_text(input: &str) -> Vec<&str> {
    input.split(',').collect()
}

#[must_use]
pub fn parse_custom_values<S: AsRef<str>>(items: &[S]) -> Vec<u32> {
    items
        .iter()
        .filter_map(|item| parse_leading_int(item.as_ref()))
        .filter(|&value| value > 0)
        .map(|value| value.min(i64::from(MAX_CUSTOM_VALUE)) as u32)
        .collect()
}

fn parse_leading_int(item: &str) -> Option<i64> {
    let trimmed = item.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut magnitude: i64 = 0;
    let mut seen_digit = false;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        magnitude = magnitude
            .saturating_mul(10)
            .saturating_add(i64::from(byte - b'0'));
    }

    if !seen_digit {
        return None;
    }

    Some(if negative { -magnitude } else { magnitude })
}
