//! Employee repository for JSON storage
//!
//! Keeps the whole employee list (with nested leave records) in a single
//! blob, `employees.json`.

use std::cell::RefCell;
use std::path::PathBuf;

use crate::error::LeaveResult;
use crate::models::Employee;

use super::file_io::{read_json_or_default, remove_file_if_exists, write_json_atomic};
use super::Persistence;

/// File-backed persistence for the employee list
#[derive(Debug, Clone)]
pub struct EmployeeRepository {
    path: PathBuf,
}

impl EmployeeRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Persistence for EmployeeRepository {
    fn load(&self) -> Vec<Employee> {
        read_json_or_default(&self.path)
    }

    fn save(&self, employees: &[Employee]) -> LeaveResult<()> {
        write_json_atomic(&self.path, employees)
    }

    fn clear(&self) -> LeaveResult<()> {
        remove_file_if_exists(&self.path)
    }
}

/// In-memory persistence, for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryPersistence {
    employees: RefCell<Vec<Employee>>,
    saves: RefCell<usize>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with pre-existing data
    pub fn with_employees(employees: Vec<Employee>) -> Self {
        Self {
            employees: RefCell::new(employees),
            saves: RefCell::new(0),
        }
    }

    /// Currently persisted employees
    pub fn snapshot(&self) -> Vec<Employee> {
        self.employees.borrow().clone()
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl Persistence for MemoryPersistence {
    fn load(&self) -> Vec<Employee> {
        self.snapshot()
    }

    fn save(&self, employees: &[Employee]) -> LeaveResult<()> {
        *self.employees.borrow_mut() = employees.to_vec();
        *self.saves.borrow_mut() += 1;
        Ok(())
    }

    fn clear(&self) -> LeaveResult<()> {
        self.employees.borrow_mut().clear();
        Ok(())
    }
}
