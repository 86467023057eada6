//! Custom error types for the leave tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{LeaveId, LeaveValidationError};

/// The main error type for leave tracker operations
#[derive(Error, Debug)]
pub enum LeaveError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Input that could not be parsed (dates, kinds, identifiers)
    #[error("Validation error: {0}")]
    Validation(String),

    /// A leave submission failed one or more field checks
    #[error("Validation error: {}", join_issues(.0))]
    InvalidLeave(Vec<LeaveValidationError>),

    /// The candidate leave overlaps an existing leave of the same employee
    #[error("{employee} already has leave booked between {start} and {end} (conflicts with {existing})")]
    Conflict {
        employee: String,
        start: NaiveDate,
        end: NaiveDate,
        existing: LeaveId,
    },

    /// A date range whose end precedes its start
    #[error("Invalid date range: {end} is before {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

fn join_issues(issues: &[LeaveValidationError]) -> String {
    issues
        .iter()
        .map(|issue| issue.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl LeaveError {
    /// Create a "not found" error for employees
    pub fn employee_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Employee",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for leave records
    pub fn leave_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Leave",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error of either flavour
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidLeave(_))
    }

    /// Check if this is an overlapping-booking error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}

impl From<std::io::Error> for LeaveError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LeaveError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for leave tracker operations
pub type LeaveResult<T> = Result<T, LeaveError>;
