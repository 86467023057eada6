//! Interval overlap checks
//!
//! Two inclusive ranges `[a1, a2]` and `[b1, b2]` conflict iff
//! `a1 <= b2 && a2 >= b1`. Checks are only ever run against a single
//! employee's leaves; overlap across employees is allowed.

use chrono::NaiveDate;

use super::date_range::DateRange;

/// Anything with an inclusive start and end day
pub trait Interval {
    fn start(&self) -> NaiveDate;
    fn end(&self) -> NaiveDate;
}

impl Interval for DateRange {
    fn start(&self) -> NaiveDate {
        DateRange::start(self)
    }

    fn end(&self) -> NaiveDate {
        DateRange::end(self)
    }
}

/// Inclusive overlap test; symmetric in its arguments
pub fn intervals_conflict<A, B>(a: &A, b: &B) -> bool
where
    A: Interval + ?Sized,
    B: Interval + ?Sized,
{
    a.start() <= b.end() && a.end() >= b.start()
}

/// True if any interval in `existing` conflicts with `candidate`
pub fn has_conflict<'a, C, T, I>(candidate: &C, existing: I) -> bool
where
    C: Interval + ?Sized,
    T: Interval + 'a,
    I: IntoIterator<Item = &'a T>,
{
    find_conflict(candidate, existing).is_some()
}

/// The first interval in `existing` that conflicts with `candidate`
pub fn find_conflict<'a, C, T, I>(candidate: &C, existing: I) -> Option<&'a T>
where
    C: Interval + ?Sized,
    T: Interval + 'a,
    I: IntoIterator<Item = &'a T>,
{
    existing
        .into_iter()
        .find(|interval| intervals_conflict(candidate, *interval))
}
