//! Employee model
//!
//! An employee owns an ordered list of leave records (insertion order).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{EmployeeId, LeaveId};
use super::leave::LeaveRecord;

/// A person whose absences are tracked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,

    /// Display name, unique within a store
    pub name: String,

    /// Job title
    pub position: String,

    /// Leave records in insertion order
    #[serde(rename = "vacations", default)]
    pub leaves: Vec<LeaveRecord>,
}

impl Employee {
    /// Create an employee with no leaves
    pub fn new(name: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            id: EmployeeId::new(),
            name: name.into(),
            position: position.into(),
            leaves: Vec::new(),
        }
    }

    pub fn leave(&self, id: LeaveId) -> Option<&LeaveRecord> {
        self.leaves.iter().find(|leave| leave.id == id)
    }

    /// Find a leave by full or short id string
    pub fn find_leave(&self, identifier: &str) -> Option<&LeaveRecord> {
        self.leaves.iter().find(|leave| leave.id.matches(identifier))
    }

    /// Earliest start date across all leaves
    pub fn earliest_start(&self) -> Option<NaiveDate> {
        self.leaves.iter().map(|leave| leave.start_date).min()
    }

    /// Latest end date across all leaves
    pub fn latest_end(&self) -> Option<NaiveDate> {
        self.leaves.iter().map(|leave| leave.end_date).max()
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.position)
    }
}
