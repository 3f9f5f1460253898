//! Calendar arithmetic shared by the accrual rules.
//!
//! Everything here is a pure function of its inputs. Date strings are parsed
//! once at the boundary with [`parse_date`]; the rules themselves only ever see
//! valid [`NaiveDate`] values.

use chrono::{DateTime, Months, NaiveDate};
use tracing::debug;

use crate::error::{EngineError, EngineResult};

/// Parses an ISO `YYYY-MM-DD` date.
///
/// The shape is strict: a four-digit year and zero-padded month and day, with
/// no sign. A full RFC 3339 timestamp is also accepted and truncated to its
/// calendar date, since stores frequently hand over `toISOString()`-style
/// values.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDate`] when the input is neither form.
///
/// # Example
///
/// ```
/// use leave_accrual::calculation::parse_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(parse_date("2023-01-15").unwrap(), NaiveDate::from_ymd_opt(2023, 1, 15).unwrap());
/// assert_eq!(
///     parse_date("2023-01-15T09:30:00Z").unwrap(),
///     NaiveDate::from_ymd_opt(2023, 1, 15).unwrap()
/// );
/// assert!(parse_date("2023-02-30").is_err());
/// assert!(parse_date("2023-1-5").is_err());
/// ```
pub fn parse_date(value: &str) -> EngineResult<NaiveDate> {
    let trimmed = value.trim();

    if !has_iso_date_prefix(trimmed) {
        return Err(EngineError::InvalidDate {
            value: value.to_string(),
            message: "expected YYYY-MM-DD".to_string(),
        });
    }

    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => Ok(date),
        Err(date_err) => match DateTime::parse_from_rfc3339(trimmed) {
            Ok(timestamp) => {
                debug!(value = %trimmed, "Truncated timestamp to calendar date");
                Ok(timestamp.date_naive())
            }
            Err(_) => Err(EngineError::InvalidDate {
                value: value.to_string(),
                message: date_err.to_string(),
            }),
        },
    }
}

/// True when `value` starts with `DDDD-DD-DD`.
fn has_iso_date_prefix(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() >= 10
        && bytes[..10].iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Returns the number of whole days from `from` to `to`.
///
/// The difference is exclusive of `to` and negative when `to` precedes `from`.
///
/// # Example
///
/// ```
/// use leave_accrual::calculation::days_between;
/// use chrono::NaiveDate;
///
/// let a = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
/// let b = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// assert_eq!(days_between(a, b), 365);
/// assert_eq!(days_between(b, a), -365);
/// ```
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Returns true for Gregorian leap years.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns 366 for leap years and 365 otherwise.
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Returns the last valid day-of-month for `month` (1-12) in `year`.
pub fn last_day_of_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Moves `date` by `months` calendar months, clamping the day-of-month.
///
/// If the original day does not exist in the target month, the last day of
/// that month is used instead. Callers counting anniversaries must always step
/// from the original anchor (`anchor + k`), never from a previously clamped
/// result, so that a 31st anchor returns to the 31st after a short month.
///
/// Returns `None` only when the result falls outside chrono's supported range.
///
/// # Example
///
/// ```
/// use leave_accrual::calculation::add_months_clamped;
/// use chrono::NaiveDate;
///
/// let jan_31 = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
/// assert_eq!(add_months_clamped(jan_31, 1), NaiveDate::from_ymd_opt(2024, 2, 29));
/// assert_eq!(add_months_clamped(jan_31, 2), NaiveDate::from_ymd_opt(2024, 3, 31));
/// assert_eq!(add_months_clamped(jan_31, -2), NaiveDate::from_ymd_opt(2023, 11, 30));
/// ```
pub fn add_months_clamped(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    let delta = Months::new(months.unsigned_abs());
    if months >= 0 {
        date.checked_add_months(delta)
    } else {
        date.checked_sub_months(delta)
    }
}

/// Counts month-anniversaries of `anchor` that fall on or before `as_of`.
///
/// Anniversary `k` is `add_months_clamped(anchor, first_offset + k)` for
/// `k = 0, 1, 2, ...`. Counting stops at the first anniversary past `as_of` or
/// once `cap` is reached, so the loop always terminates.
pub(crate) fn count_month_anniversaries(
    anchor: NaiveDate,
    first_offset: i32,
    as_of: NaiveDate,
    cap: u32,
) -> u32 {
    let mut completed = 0;

    while completed < cap {
        let offset = first_offset + completed as i32;
        match add_months_clamped(anchor, offset) {
            Some(anniversary) if anniversary <= as_of => completed += 1,
            _ => break,
        }
    }

    completed
}
