//! Calendar date ranges and day arithmetic
//!
//! All ranges are inclusive on both ends and work on local calendar days
//! (`NaiveDate`); there is no time-of-day or timezone component.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FusedIterator;

use crate::error::{LeaveError, LeaveResult};

/// Number of calendar days from `start` to `end`, both inclusive
pub fn inclusive_day_count(start: NaiveDate, end: NaiveDate) -> LeaveResult<i64> {
    if end < start {
        return Err(LeaveError::InvalidRange { start, end });
    }
    Ok((end - start).num_days() + 1)
}

/// Saturday or Sunday
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Every day from `start` to `end` inclusive, ascending.
///
/// Yields nothing when `end < start`.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> Days {
    Days {
        next: (start <= end).then_some(start),
        end,
    }
}

/// Every first-of-month from `start`'s month through `end`'s month
pub fn months_spanning(start: NaiveDate, end: NaiveDate) -> Months {
    let last = month_start(end);
    let first = month_start(start);
    Months {
        next: (first <= last).then_some(first),
        last,
    }
}

/// First day of the month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`
pub fn month_end(date: NaiveDate) -> NaiveDate {
    match add_months(month_start(date), 1) {
        Some(next) => next - Duration::days(1),
        // December of the last representable year
        None => NaiveDate::MAX,
    }
}

/// Shift a date by `months` whole months.
///
/// Days past the end of the target month are clamped to its last day.
/// Returns `None` when the result falls outside chrono's supported range.
pub fn add_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    let total = (date.year() * 12 + date.month0() as i32).checked_add(months)?;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;

    (date.day().min(28)..=date.day())
        .rev()
        .find_map(|day| NaiveDate::from_ymd_opt(year, month, day))
}

/// Today's date on the local calendar
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Lazy iterator over consecutive calendar days
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for Days {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current < self.end {
            current.succ_opt()
        } else {
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .next
            .map(|next| ((self.end - next).num_days() + 1) as usize)
            .unwrap_or(0);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Days {}

impl FusedIterator for Days {}

/// Lazy iterator over first-of-month dates
#[derive(Debug, Clone)]
pub struct Months {
    next: Option<NaiveDate>,
    last: NaiveDate,
}

impl Iterator for Months {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current < self.last {
            add_months(current, 1)
        } else {
            None
        };
        Some(current)
    }
}

impl FusedIterator for Months {}

/// An inclusive range of calendar days with `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range, rejecting `end < start`
    pub fn new(start: NaiveDate, end: NaiveDate) -> LeaveResult<Self> {
        if end < start {
            return Err(LeaveError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// A one-day range
    pub fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// The whole month `year-month`, or `None` for an invalid month
    pub fn month(year: i32, month: u32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(Self {
            start,
            end: month_end(start),
        })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Check if a date falls within this range
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of days in the range (at least 1)
    pub fn day_count(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn days(&self) -> Days {
        days_between(self.start, self.end)
    }

    pub fn months(&self) -> Months {
        months_spanning(self.start, self.end)
    }

    /// Number of Saturdays and Sundays in the range
    pub fn weekend_days(&self) -> i64 {
        self.days().filter(|day| is_weekend(*day)).count() as i64
    }

    /// Number of weekdays in the range
    pub fn working_days(&self) -> i64 {
        self.day_count() - self.weekend_days()
    }

    /// Widen the range to cover whole months on both ends
    pub fn expand_to_months(&self) -> Self {
        Self {
            start: month_start(self.start),
            end: month_end(self.end),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
