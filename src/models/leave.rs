//! Leave record model
//!
//! A leave record is one booked interval of absence (vacation, sick leave or a
//! day off) owned by exactly one employee.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use super::date_range::{inclusive_day_count, DateRange};
use super::ids::LeaveId;
use super::overlap::Interval;

/// Kind of absence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LeaveKind {
    #[default]
    Vacation,
    Sick,
    DayOff,
}

impl LeaveKind {
    pub const ALL: [LeaveKind; 3] = [LeaveKind::Vacation, LeaveKind::Sick, LeaveKind::DayOff];

    /// Canonical identifier, identical to the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vacation => "vacation",
            Self::Sick => "sick",
            Self::DayOff => "day_off",
        }
    }
}

impl FromStr for LeaveKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vacation" => Ok(Self::Vacation),
            "sick" | "sick_leave" => Ok(Self::Sick),
            "day_off" | "dayoff" | "day-off" => Ok(Self::DayOff),
            other => Err(format!(
                "unknown leave kind '{}' (expected vacation, sick or day_off)",
                other
            )),
        }
    }
}

/// One booked leave interval
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRecord {
    pub id: LeaveId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: LeaveKind,
}

impl LeaveRecord {
    /// Create a record with a fresh id
    pub fn new(start_date: NaiveDate, end_date: NaiveDate, kind: LeaveKind) -> Self {
        Self {
            id: LeaveId::new(),
            start_date,
            end_date,
            kind,
        }
    }

    /// Check if a date falls within this leave
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Inclusive length in days.
    ///
    /// Records edited leniently can end up reversed; those count as zero days.
    pub fn duration_days(&self) -> i64 {
        inclusive_day_count(self.start_date, self.end_date).unwrap_or(0)
    }

    /// The record's interval, or `None` if an edit left it reversed
    pub fn range(&self) -> Option<DateRange> {
        DateRange::new(self.start_date, self.end_date).ok()
    }

    /// Apply a single-field edit
    pub fn apply(&mut self, field: LeaveField) {
        match field {
            LeaveField::StartDate(date) => self.start_date = date,
            LeaveField::EndDate(date) => self.end_date = date,
            LeaveField::Kind(kind) => self.kind = kind,
        }
    }
}

impl Interval for LeaveRecord {
    fn start(&self) -> NaiveDate {
        self.start_date
    }

    fn end(&self) -> NaiveDate {
        self.end_date
    }
}

/// A replacement value for one editable field of a leave record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveField {
    StartDate(NaiveDate),
    EndDate(NaiveDate),
    Kind(LeaveKind),
}

impl LeaveField {
    /// Serialized field name, as it appears in the stored JSON
    pub fn name(&self) -> &'static str {
        match self {
            Self::StartDate(_) => "startDate",
            Self::EndDate(_) => "endDate",
            Self::Kind(_) => "type",
        }
    }
}

/// A leave submission before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLeave {
    pub employee_name: String,
    pub position: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub kind: LeaveKind,
}

impl NewLeave {
    /// A fully populated submission
    pub fn new(
        employee_name: impl Into<String>,
        position: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        kind: LeaveKind,
    ) -> Self {
        Self {
            employee_name: employee_name.into(),
            position: position.into(),
            start_date: Some(start_date),
            end_date: Some(end_date),
            kind,
        }
    }

    /// Check every field and report all problems at once.
    ///
    /// On success returns the validated interval.
    pub fn validate(&self) -> Result<DateRange, Vec<LeaveValidationError>> {
        let mut issues = Vec::new();

        if self.employee_name.trim().is_empty() {
            issues.push(LeaveValidationError::EmptyName);
        }
        if self.position.trim().is_empty() {
            issues.push(LeaveValidationError::EmptyPosition);
        }
        if self.start_date.is_none() {
            issues.push(LeaveValidationError::MissingStartDate);
        }
        if self.end_date.is_none() {
            issues.push(LeaveValidationError::MissingEndDate);
        }

        let range = match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => match DateRange::new(start, end) {
                Ok(range) => Some(range),
                Err(_) => {
                    issues.push(LeaveValidationError::EndBeforeStart { start, end });
                    None
                }
            },
            _ => None,
        };

        match range {
            Some(range) if issues.is_empty() => Ok(range),
            _ => Err(issues),
        }
    }
}

/// Validation problems with a leave submission or edit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeaveValidationError {
    #[error("employee name is required")]
    EmptyName,
    #[error("position is required")]
    EmptyPosition,
    #[error("start date is required")]
    MissingStartDate,
    #[error("end date is required")]
    MissingEndDate,
    #[error("end date {end} is before start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
}
