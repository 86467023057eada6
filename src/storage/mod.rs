//! Storage layer for the leave tracker
//!
//! The core sees persistence as a key-value blob store with a single fixed
//! key (`employees`). Reads never fail: absent or malformed data loads as an
//! empty list.

pub mod employees;
pub mod file_io;

pub use employees::{EmployeeRepository, MemoryPersistence};
pub use file_io::{read_json, read_json_or_default, write_json_atomic};

use crate::audit::AuditLogger;
use crate::config::paths::LeavePaths;
use crate::error::LeaveResult;
use crate::models::Employee;

/// Persistence collaborator for the employee list
pub trait Persistence {
    /// Load all employees; empty if absent or malformed
    fn load(&self) -> Vec<Employee>;

    /// Replace the stored employees
    fn save(&self, employees: &[Employee]) -> LeaveResult<()>;

    /// Remove all stored data
    fn clear(&self) -> LeaveResult<()>;
}

/// Main storage coordinator for the on-disk layout
pub struct Storage {
    pub employees: EmployeeRepository,
    pub audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: &LeavePaths) -> LeaveResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            employees: EmployeeRepository::new(paths.employees_file()),
            audit: AuditLogger::new(paths.audit_log()),
        })
    }

    /// Split into the persistence collaborator and the audit logger
    pub fn into_parts(self) -> (EmployeeRepository, AuditLogger) {
        (self.employees, self.audit)
    }
}
