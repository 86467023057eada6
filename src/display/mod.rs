//! Display formatting for terminal output
//!
//! Turns employees, month grids and day projections into plain text tables.
//! Labels and markers for leave kinds live here and nowhere else.

pub mod calendar;
pub mod employee;

pub use calendar::{format_calendar, format_day, format_month_grid};
pub use employee::{format_employee_details, format_employee_list};

use std::fmt::Write;

use chrono::NaiveDate;

use crate::models::LeaveKind;

/// Human label for a leave kind
pub fn kind_label(kind: LeaveKind) -> &'static str {
    match kind {
        LeaveKind::Vacation => "Vacation",
        LeaveKind::Sick => "Sick leave",
        LeaveKind::DayOff => "Day off",
    }
}

/// Single-character marker used in month grids
pub fn kind_marker(kind: LeaveKind) -> char {
    match kind {
        LeaveKind::Vacation => 'V',
        LeaveKind::Sick => 'S',
        LeaveKind::DayOff => 'D',
    }
}

/// Format a date with a strftime pattern, falling back to ISO 8601 when the
/// pattern is malformed
pub fn format_date(date: NaiveDate, date_format: &str) -> String {
    let mut formatted = String::new();
    if write!(formatted, "{}", date.format(date_format)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    formatted
}
