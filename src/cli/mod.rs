//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the session and display layers.

pub mod calendar;
pub mod leave;

pub use calendar::{handle_calendar_command, CalendarCommands};
pub use leave::{handle_leave_command, LeaveCommands};

use chrono::NaiveDate;

use crate::error::{LeaveError, LeaveResult};
use crate::models::{Employee, LeaveKind, LeaveRecord, VacationStore};

/// Parse a `YYYY-MM-DD` argument
pub(crate) fn parse_date(value: &str) -> LeaveResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        LeaveError::Validation(format!(
            "Invalid date: '{}'. Use the format YYYY-MM-DD",
            value
        ))
    })
}

/// Parse a `YYYY-MM` argument into the first day of that month
pub(crate) fn parse_month(value: &str) -> LeaveResult<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", value.trim()), "%Y-%m-%d").map_err(|_| {
        LeaveError::Validation(format!("Invalid month: '{}'. Use the format YYYY-MM", value))
    })
}

pub(crate) fn parse_kind(value: &str) -> LeaveResult<LeaveKind> {
    value.parse().map_err(LeaveError::Validation)
}

pub(crate) fn parse_kind_filter(value: Option<&str>) -> LeaveResult<Option<LeaveKind>> {
    value.map(parse_kind).transpose()
}

/// Look up an employee by name or ID
pub(crate) fn find_employee<'a>(
    store: &'a VacationStore,
    identifier: &str,
) -> LeaveResult<&'a Employee> {
    store
        .find_employee(identifier)
        .ok_or_else(|| LeaveError::employee_not_found(identifier))
}

/// Look up one of an employee's leaves by ID
pub(crate) fn find_leave<'a>(
    employee: &'a Employee,
    identifier: &str,
) -> LeaveResult<&'a LeaveRecord> {
    employee
        .find_leave(identifier)
        .ok_or_else(|| LeaveError::leave_not_found(identifier))
}
