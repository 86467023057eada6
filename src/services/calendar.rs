//! Calendar projection
//!
//! Projects leave records onto calendar days. The same projector drives the
//! company-wide calendar (every employee, a rolling window of months starting
//! at the current month) and the single-employee timeline (a window covering
//! that employee's own leaves).

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::date_range::{add_months, month_end, month_start};
use crate::models::{
    is_weekend, DateRange, Employee, EmployeeId, LeaveKind, LeaveRecord, VacationStore,
};

/// Where a day falls within a leave
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanPosition {
    /// One-day leave: both first and last day
    Single,
    First,
    Interior,
    Last,
}

impl SpanPosition {
    /// Position of `date` within `leave`; `date` is assumed to be inside it
    pub fn of(leave: &LeaveRecord, date: NaiveDate) -> Self {
        match (date == leave.start_date, date == leave.end_date) {
            (true, true) => Self::Single,
            (true, false) => Self::First,
            (false, true) => Self::Last,
            (false, false) => Self::Interior,
        }
    }

    pub fn is_first(&self) -> bool {
        matches!(self, Self::Single | Self::First)
    }

    pub fn is_last(&self) -> bool {
        matches!(self, Self::Single | Self::Last)
    }
}

/// A leave record active on a particular day, with its owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveLeave {
    pub leave: LeaveRecord,
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub employee_position: String,
    pub span: SpanPosition,
}

/// One day of a month grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_weekend: bool,
    pub is_today: bool,
    pub leaves: Vec<ActiveLeave>,
}

/// Every day of one calendar month, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub month_start: NaiveDate,
    pub days: Vec<DayCell>,
}

impl MonthGrid {
    pub fn year(&self) -> i32 {
        self.month_start.year()
    }

    pub fn month(&self) -> u32 {
        self.month_start.month()
    }

    pub fn month_end(&self) -> NaiveDate {
        month_end(self.month_start)
    }

    /// Empty cells before day 1 in a 7-column layout whose first column is
    /// `week_start`
    pub fn leading_blanks(&self, week_start: Weekday) -> usize {
        let first = self.month_start.weekday().num_days_from_monday();
        let offset = week_start.num_days_from_monday();
        ((first + 7 - offset) % 7) as usize
    }

    /// Number of days with at least one active leave
    pub fn busy_days(&self) -> usize {
        self.days.iter().filter(|day| !day.leaves.is_empty()).count()
    }
}

/// Every leave (optionally of one kind) active on `date`, across all employees
pub fn project_day(
    store: &VacationStore,
    date: NaiveDate,
    filter: Option<LeaveKind>,
) -> Vec<ActiveLeave> {
    CalendarProjector::new(store, date)
        .with_filter(filter)
        .project_day(date)
}

/// Longest company window, in months
pub const MAX_CALENDAR_MONTHS: u32 = 120;

/// Rolling company window: first day of the current month through the end of
/// the month `months - 1` later.
///
/// `months` is clamped to `1..=MAX_CALENDAR_MONTHS`; a window running past the
/// last representable month stops there.
pub fn company_window(today: NaiveDate, months: u32) -> DateRange {
    let start = month_start(today);
    let span = months.clamp(1, MAX_CALENDAR_MONTHS) - 1;
    let last_month = i32::try_from(span)
        .ok()
        .and_then(|span| add_months(start, span))
        .unwrap_or(NaiveDate::MAX);
    DateRange::new(start, month_end(last_month)).unwrap_or_else(|_| DateRange::single(start))
}

/// Window covering all of one employee's leaves, widened to whole months.
///
/// An employee without leaves gets the current month.
pub fn employee_window(employee: &Employee, today: NaiveDate) -> DateRange {
    let current = DateRange::single(today).expand_to_months();
    match (employee.earliest_start(), employee.latest_end()) {
        (Some(start), Some(end)) => DateRange::new(month_start(start), month_end(end))
            .unwrap_or(current),
        _ => current,
    }
}

/// Builds day projections and month grids from a store snapshot
#[derive(Debug, Clone, Copy)]
pub struct CalendarProjector<'a> {
    store: &'a VacationStore,
    today: NaiveDate,
    filter: Option<LeaveKind>,
    employee: Option<EmployeeId>,
}

impl<'a> CalendarProjector<'a> {
    pub fn new(store: &'a VacationStore, today: NaiveDate) -> Self {
        Self {
            store,
            today,
            filter: None,
            employee: None,
        }
    }

    /// Only project leaves of `kind` (`None` shows every kind)
    pub fn with_filter(mut self, kind: Option<LeaveKind>) -> Self {
        self.filter = kind;
        self
    }

    /// Only project one employee's leaves
    pub fn for_employee(mut self, employee_id: EmployeeId) -> Self {
        self.employee = Some(employee_id);
        self
    }

    /// Active leaves on `date`, by employee insertion order then leave
    /// insertion order
    pub fn project_day(&self, date: NaiveDate) -> Vec<ActiveLeave> {
        let filter = self.filter;
        let scope = self.employee;

        self.store
            .employees()
            .iter()
            .filter(move |employee| scope.map_or(true, |id| employee.id == id))
            .flat_map(move |employee| {
                employee
                    .leaves
                    .iter()
                    .filter(move |leave| leave.contains(date))
                    .filter(move |leave| filter.map_or(true, |kind| leave.kind == kind))
                    .map(move |leave| ActiveLeave {
                        leave: leave.clone(),
                        employee_id: employee.id,
                        employee_name: employee.name.clone(),
                        employee_position: employee.position.clone(),
                        span: SpanPosition::of(leave, date),
                    })
            })
            .collect()
    }

    /// Day cells for the month containing `month_start`
    pub fn build_month_grid(&self, month_start_date: NaiveDate) -> MonthGrid {
        let first = month_start(month_start_date);
        let days = DateRange::single(first)
            .expand_to_months()
            .days()
            .map(|date| DayCell {
                date,
                is_weekend: is_weekend(date),
                is_today: date == self.today,
                leaves: self.project_day(date),
            })
            .collect();

        MonthGrid {
            month_start: first,
            days,
        }
    }

    /// One grid per month spanned by `window`
    pub fn build_calendar(&self, window: DateRange) -> Vec<MonthGrid> {
        window
            .months()
            .map(|month| self.build_month_grid(month))
            .collect()
    }

    /// The company calendar over `months` months from the current one
    pub fn company_calendar(&self, months: u32) -> Vec<MonthGrid> {
        self.build_calendar(company_window(self.today, months))
    }

    /// One employee's timeline over their own leave window
    pub fn employee_calendar(&self, employee: &Employee) -> Vec<MonthGrid> {
        self.for_employee(employee.id)
            .build_calendar(employee_window(employee, self.today))
    }
}
