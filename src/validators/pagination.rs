//! Pagination parameter normalization.
//!
//! Page and limit come straight from the query string and are never rejected.
//! Only the leading integer of a value counts; a value without one falls back
//! to the default. Out-of-range values are clamped into `[1, max_limit]`
//! (limit) or `[1, ..)` (page).

use std::num::IntErrorKind;

use crate::constants::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
use crate::models::PageRequest;

/// Parse an optional raw query value as a signed integer.
///
/// Reads an optional sign followed by the leading run of decimal digits and
/// ignores whatever follows, so `"2.5"` is 2 and `"12abc"` is 12. Returns `None`
/// when the value is absent or has no leading digits. Numerals that do not fit
/// in an `i64` saturate so they still clamp in the expected direction.
pub fn parse_numeric_param(raw: Option<&str>) -> Option<i64> {
    let raw = raw?.trim_start();
    let sign_len = usize::from(raw.starts_with(['+', '-']));
    let digits_len = raw[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }

    match raw[..sign_len + digits_len].parse::<i64>() {
        Ok(value) => Some(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Resolve raw `page`/`limit` query values into a normalized [`PageRequest`].
pub fn resolve_page_request(
    raw_page: Option<&str>,
    raw_limit: Option<&str>,
    max_limit: u64,
) -> PageRequest {
    let page = parse_numeric_param(raw_page).unwrap_or(DEFAULT_PAGE_NUMBER as i64);
    let limit = parse_numeric_param(raw_limit).unwrap_or(DEFAULT_PAGE_SIZE as i64);

    PageRequest {
        page: clamp_to_range(page, 1, u64::MAX),
        limit: clamp_to_range(limit, 1, max_limit.max(1)),
    }
}

fn clamp_to_range(value: i64, min: u64, max: u64) -> u64 {
    u64::try_from(value).unwrap_or(0).clamp(min, max)
}
