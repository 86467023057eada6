//! Core data models for the leave tracker
//!
//! This module contains the scheduling domain: employees, their leave
//! records, inclusive date ranges, overlap checks and the immutable store.

pub mod date_range;
pub mod employee;
pub mod ids;
pub mod leave;
pub mod overlap;
pub mod store;

pub use date_range::{
    days_between, inclusive_day_count, is_weekend, months_spanning, DateRange, Days, Months,
};
pub use employee::Employee;
pub use ids::{EmployeeId, LeaveId};
pub use leave::{LeaveField, LeaveKind, LeaveRecord, LeaveValidationError, NewLeave};
pub use overlap::{find_conflict, has_conflict, intervals_conflict, Interval};
pub use store::VacationStore;
