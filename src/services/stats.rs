//! Leave statistics
//!
//! Per-employee totals for the employee list, and a working/weekend day
//! breakdown shown before a leave is booked.

use crate::models::{DateRange, Employee, LeaveKind};

/// Totals for one employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmployeeStats {
    /// Inclusive days across every leave
    pub total_days: i64,
    pub vacation_count: usize,
    pub sick_count: usize,
    pub day_off_count: usize,
}

impl EmployeeStats {
    pub fn for_employee(employee: &Employee) -> Self {
        employee
            .leaves
            .iter()
            .fold(Self::default(), |mut stats, leave| {
                stats.total_days += leave.duration_days();
                match leave.kind {
                    LeaveKind::Vacation => stats.vacation_count += 1,
                    LeaveKind::Sick => stats.sick_count += 1,
                    LeaveKind::DayOff => stats.day_off_count += 1,
                }
                stats
            })
    }

    pub fn count(&self, kind: LeaveKind) -> usize {
        match kind {
            LeaveKind::Vacation => self.vacation_count,
            LeaveKind::Sick => self.sick_count,
            LeaveKind::DayOff => self.day_off_count,
        }
    }

    pub fn leave_count(&self) -> usize {
        self.vacation_count + self.sick_count + self.day_off_count
    }
}

/// Day breakdown of a prospective leave
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangePreview {
    pub total_days: i64,
    pub working_days: i64,
    pub weekend_days: i64,
}

impl RangePreview {
    pub fn of(range: &DateRange) -> Self {
        let weekend_days = range.weekend_days();
        let total_days = range.day_count();
        Self {
            total_days,
            working_days: total_days - weekend_days,
            weekend_days,
        }
    }
}
