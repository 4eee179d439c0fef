//! Candidate datetime ranges.

use crate::error::{CspError, CspResultOf};
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use std::collections::BTreeSet;

/// The candidate datetimes for a single meeting.
///
/// Ordered so that search visits candidates in a stable order.
pub type Domain = BTreeSet<NaiveDateTime>;

/// Builds the inclusive range `start, start + step, ...` up to `end`.
///
/// # Errors
///
/// Returns [`CspError::InvalidRange`] if `step` is not positive or
/// `start` is after `end`.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, TimeDelta};
/// use u_calsat::model::date_range;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// let slots = date_range(start, end, TimeDelta::hours(1)).unwrap();
/// assert_eq!(slots.len(), 4);
/// ```
pub fn date_range(
    start: NaiveDateTime,
    end: NaiveDateTime,
    step: TimeDelta,
) -> CspResultOf<Domain> {
    if step <= TimeDelta::zero() {
        return Err(CspError::InvalidRange(format!(
            "step must be positive, got {step}"
        )));
    }
    if start > end {
        return Err(CspError::InvalidRange(format!(
            "start {start} is after end {end}"
        )));
    }

    let mut range = Domain::new();
    let mut current = start;
    while current <= end {
        range.insert(current);
        current = match current.checked_add_signed(step) {
            Some(next) => next,
            None => break,
        };
    }
    Ok(range)
}

/// One candidate per day from `start` to `end` inclusive, at midnight.
pub fn daily_range(start: NaiveDate, end: NaiveDate) -> CspResultOf<Domain> {
    date_range(
        start.and_time(chrono::NaiveTime::MIN),
        end.and_time(chrono::NaiveTime::MIN),
        TimeDelta::days(1),
    )
}
