//! The vacation store
//!
//! `VacationStore` is an immutable snapshot of every employee and their leave
//! records. Operations never mutate in place: each returns a new store, so the
//! caller can compare snapshots and persist them atomically.
//!
//! Invariant: no two leave records of the same employee overlap. The lenient
//! [`VacationStore::edit_leave_field`] is the one operation that does not
//! re-check it;
//! [`VacationStore::edit_leave_checked`] is its checked counterpart.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{LeaveError, LeaveResult};

use super::employee::Employee;
use super::ids::{EmployeeId, LeaveId};
use super::leave::{LeaveField, LeaveRecord, LeaveValidationError, NewLeave};
use super::overlap::find_conflict;

/// Snapshot of all employees and their leaves
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VacationStore {
    employees: Vec<Employee>,
}

impl VacationStore {
    /// An empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from persisted employees.
    ///
    /// Later entries that repeat an earlier id or name are dropped so the
    /// store's keys stay unique.
    pub fn from_employees(employees: Vec<Employee>) -> Self {
        let mut ids = HashSet::new();
        let mut names = HashSet::new();
        let mut kept = Vec::with_capacity(employees.len());

        for employee in employees {
            if ids.contains(&employee.id) || names.contains(&employee.name) {
                tracing::warn!(
                    employee = %employee.name,
                    id = %employee.id,
                    "Dropping duplicate employee from loaded data"
                );
                continue;
            }
            ids.insert(employee.id);
            names.insert(employee.name.clone());
            kept.push(employee);
        }

        Self { employees: kept }
    }

    /// Employees in insertion order
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Total number of leave records across all employees
    pub fn leave_count(&self) -> usize {
        self.employees.iter().map(|e| e.leaves.len()).sum()
    }

    pub fn employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Exact lookup on the trimmed name
    pub fn employee_by_name(&self, name: &str) -> Option<&Employee> {
        let name = name.trim();
        self.employees.iter().find(|e| e.name == name)
    }

    /// Find an employee by name or by full/short id string
    pub fn find_employee(&self, identifier: &str) -> Option<&Employee> {
        self.employee_by_name(identifier)
            .or_else(|| self.employees.iter().find(|e| e.id.matches(identifier)))
    }

    pub fn leave(&self, employee_id: EmployeeId, leave_id: LeaveId) -> Option<&LeaveRecord> {
        self.employee(employee_id)?.leave(leave_id)
    }

    /// Book a new leave.
    ///
    /// An unknown name creates a new employee with the supplied position. A
    /// known name reuses that employee (its position is left untouched) and the
    /// candidate must not overlap any of the employee's existing leaves.
    pub fn add_leave(&self, request: NewLeave) -> LeaveResult<Self> {
        let range = request.validate().map_err(LeaveError::InvalidLeave)?;
        let name = request.employee_name.trim();
        let record = LeaveRecord::new(range.start(), range.end(), request.kind);

        let mut employees = self.employees.clone();
        match employees.iter_mut().find(|e| e.name == name) {
            Some(employee) => {
                if let Some(existing) = find_conflict(&range, &employee.leaves) {
                    return Err(LeaveError::Conflict {
                        employee: employee.name.clone(),
                        start: range.start(),
                        end: range.end(),
                        existing: existing.id,
                    });
                }
                employee.leaves.push(record);
            }
            None => {
                let mut employee = Employee::new(name, request.position.trim());
                employee.leaves.push(record);
                employees.push(employee);
            }
        }

        Ok(Self { employees })
    }

    /// Replace one field of one leave record.
    ///
    /// Dates are not re-validated, so an edit may reverse the record or make
    /// it overlap a sibling. Unknown ids return an unchanged store.
    pub fn edit_leave_field(
        &self,
        employee_id: EmployeeId,
        leave_id: LeaveId,
        field: LeaveField,
    ) -> Self {
        let mut next = self.clone();
        if let Some(record) = next.record_mut(employee_id, leave_id) {
            record.apply(field);
        }
        next
    }

    /// Apply every field of one edit together, keeping the store invariant.
    ///
    /// Only the final record is checked, so a leave may move past another
    /// leave of the same employee in one step. Fails with `NotFound` for
    /// unknown ids, `InvalidLeave` if the edit puts the end before the start
    /// and `Conflict` if it overlaps another leave of the same employee.
    pub fn edit_leave_checked(
        &self,
        employee_id: EmployeeId,
        leave_id: LeaveId,
        fields: &[LeaveField],
    ) -> LeaveResult<Self> {
        let employee = self
            .employee(employee_id)
            .ok_or_else(|| LeaveError::employee_not_found(employee_id.to_string()))?;
        let mut edited = employee
            .leave(leave_id)
            .cloned()
            .ok_or_else(|| LeaveError::leave_not_found(leave_id.to_string()))?;
        for field in fields {
            edited.apply(*field);
        }

        if edited.end_date < edited.start_date {
            return Err(LeaveError::InvalidLeave(vec![
                LeaveValidationError::EndBeforeStart {
                    start: edited.start_date,
                    end: edited.end_date,
                },
            ]));
        }

        let siblings = employee.leaves.iter().filter(|leave| leave.id != leave_id);
        if let Some(existing) = find_conflict(&edited, siblings) {
            return Err(LeaveError::Conflict {
                employee: employee.name.clone(),
                start: edited.start_date,
                end: edited.end_date,
                existing: existing.id,
            });
        }

        let mut next = self.clone();
        if let Some(record) = next.record_mut(employee_id, leave_id) {
            *record = edited;
        }
        Ok(next)
    }

    /// Remove one leave record. The employee stays even with no leaves left.
    pub fn delete_leave(&self, employee_id: EmployeeId, leave_id: LeaveId) -> Self {
        let mut next = self.clone();
        if let Some(employee) = next.employees.iter_mut().find(|e| e.id == employee_id) {
            employee.leaves.retain(|leave| leave.id != leave_id);
        }
        next
    }

    /// An empty store
    pub fn clear(&self) -> Self {
        Self::new()
    }

    fn record_mut(&mut self, employee_id: EmployeeId, leave_id: LeaveId) -> Option<&mut LeaveRecord> {
        self.employees
            .iter_mut()
            .find(|e| e.id == employee_id)?
            .leaves
            .iter_mut()
            .find(|leave| leave.id == leave_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LeaveKind;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn alice_store() -> VacationStore {
        VacationStore::new()
            .add_leave(NewLeave::new(
                "Alice",
                "Engineer",
                date(2024, 6, 10),
                date(2024, 6, 14),
                LeaveKind::Vacation,
            ))
            .unwrap()
    }

    #[test]
    fn test_add_creates_employee_with_one_leave() {
        let store = alice_store();

        assert_eq!(store.len(), 1);
        let alice = store.employee_by_name("Alice").unwrap();
        assert_eq!(alice.position, "Engineer");
        assert_eq!(alice.leaves.len(), 1);
        assert_eq!(alice.leaves[0].duration_days(), 5);
    }

    #[test]
    fn test_add_conflict_leaves_store_unchanged() {
        let store = alice_store();
        let before = store.clone();

        let err = store
            .add_leave(NewLeave::new(
                "Alice",
                "Engineer",
                date(2024, 6, 12),
                date(2024, 6, 13),
                LeaveKind::Sick,
            ))
            .unwrap_err();

        assert!(err.is_conflict());
        assert_eq!(store, before);
    }

    #[test]
    fn test_add_adjacent_leave_succeeds() {
        let store = alice_store()
            .add_leave(NewLeave::new(
                "Alice",
                "Engineer",
                date(2024, 6, 15),
                date(2024, 6, 16),
                LeaveKind::Sick,
            ))
            .unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.employee_by_name("Alice").unwrap().leaves.len(), 2);
    }

    #[test]
    fn test_add_keeps_existing_position() {
        let store = alice_store()
            .add_leave(NewLeave::new(
                "Alice",
                "Manager",
                date(2024, 7, 1),
                date(2024, 7, 1),
                LeaveKind::DayOff,
            ))
            .unwrap();

        let alice = store.employee_by_name("Alice").unwrap();
        assert_eq!(alice.position, "Engineer");
    }

    #[test]
    fn test_cross_employee_overlap_allowed() {
        let store = alice_store()
            .add_leave(NewLeave::new(
                "Bob",
                "Designer",
                date(2024, 6, 10),
                date(2024, 6, 14),
                LeaveKind::Vacation,
            ))
            .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.leave_count(), 2);
    }

    #[test]
    fn test_add_validation_failure() {
        let store = VacationStore::new();
        let err = store
            .add_leave(NewLeave {
                employee_name: "".into(),
                position: "Engineer".into(),
                start_date: Some(date(2024, 6, 10)),
                end_date: None,
                kind: LeaveKind::Vacation,
            })
            .unwrap_err();

        match err {
            LeaveError::InvalidLeave(issues) => {
                assert_eq!(
                    issues,
                    vec![
                        LeaveValidationError::EmptyName,
                        LeaveValidationError::MissingEndDate
                    ]
                );
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_trims_name() {
        let store = alice_store()
            .add_leave(NewLeave::new(
                "  Alice ",
                "Engineer",
                date(2024, 9, 2),
                date(2024, 9, 3),
                LeaveKind::Vacation,
            ))
            .unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_edit_then_read() {
        let store = alice_store();
        let alice = store.employee_by_name("Alice").unwrap();
        let (emp_id, leave_id) = (alice.id, alice.leaves[0].id);

        let edited = store.edit_leave_field(emp_id, leave_id, LeaveField::Kind(LeaveKind::Sick));
        assert_eq!(edited.leave(emp_id, leave_id).unwrap().kind, LeaveKind::Sick);

        let edited = edited.edit_leave_field(
            emp_id,
            leave_id,
            LeaveField::EndDate(date(2024, 6, 20)),
        );
        assert_eq!(
            edited.leave(emp_id, leave_id).unwrap().end_date,
            date(2024, 6, 20)
        );
        // original snapshot untouched
        assert_eq!(store.leave(emp_id, leave_id).unwrap().kind, LeaveKind::Vacation);
    }

    #[test]
    fn test_edit_unknown_id_is_noop() {
        let store = alice_store();
        let alice = store.employee_by_name("Alice").unwrap();

        let edited = store.edit_leave_field(
            alice.id,
            LeaveId::new(),
            LeaveField::Kind(LeaveKind::Sick),
        );
        assert_eq!(edited, store);

        let edited = store.edit_leave_field(
            EmployeeId::new(),
            alice.leaves[0].id,
            LeaveField::Kind(LeaveKind::Sick),
        );
        assert_eq!(edited, store);
    }

    #[test]
    fn test_lenient_edit_allows_overlap() {
        let store = alice_store()
            .add_leave(NewLeave::new(
                "Alice",
                "Engineer",
                date(2024, 6, 20),
                date(2024, 6, 21),
                LeaveKind::DayOff,
            ))
            .unwrap();
        let alice = store.employee_by_name("Alice").unwrap();
        let (emp_id, second) = (alice.id, alice.leaves[1].id);

        let edited =
            store.edit_leave_field(emp_id, second, LeaveField::StartDate(date(2024, 6, 12)));
        assert_eq!(
            edited.leave(emp_id, second).unwrap().start_date,
            date(2024, 6, 12)
        );
    }

    #[test]
    fn test_checked_edit_rejects_overlap_and_reversal() {
        let store = alice_store()
            .add_leave(NewLeave::new(
                "Alice",
                "Engineer",
                date(2024, 6, 20),
                date(2024, 6, 21),
                LeaveKind::DayOff,
            ))
            .unwrap();
        let alice = store.employee_by_name("Alice").unwrap();
        let (emp_id, first, second) = (alice.id, alice.leaves[0].id, alice.leaves[1].id);

        let overlap = store
            .edit_leave_checked(emp_id, second, &[LeaveField::StartDate(date(2024, 6, 12))])
            .unwrap_err();
        assert!(overlap.is_conflict());

        let reversed = store
            .edit_leave_checked(emp_id, first, &[LeaveField::EndDate(date(2024, 6, 1))])
            .unwrap_err();
        assert!(reversed.is_validation());

        let missing = store
            .edit_leave_checked(emp_id, LeaveId::new(), &[LeaveField::Kind(LeaveKind::Sick)])
            .unwrap_err();
        assert!(missing.is_not_found());
    }

    #[test]
    fn test_checked_edit_may_move_within_own_range() {
        let store = alice_store();
        let alice = store.employee_by_name("Alice").unwrap();
        let (emp_id, leave_id) = (alice.id, alice.leaves[0].id);

        let edited = store
            .edit_leave_checked(emp_id, leave_id, &[LeaveField::EndDate(date(2024, 6, 12))])
            .unwrap();
        assert_eq!(
            edited.leave(emp_id, leave_id).unwrap().end_date,
            date(2024, 6, 12)
        );
    }

    #[test]
    fn test_checked_edit_moves_past_another_leave() {
        let store = alice_store()
            .add_leave(NewLeave::new(
                "Alice",
                "Engineer",
                date(2024, 6, 20),
                date(2024, 6, 21),
                LeaveKind::DayOff,
            ))
            .unwrap();
        let alice = store.employee_by_name("Alice").unwrap();
        let (emp_id, first) = (alice.id, alice.leaves[0].id);

        let moved = store
            .edit_leave_checked(
                emp_id,
                first,
                &[
                    LeaveField::StartDate(date(2024, 7, 1)),
                    LeaveField::EndDate(date(2024, 7, 5)),
                    LeaveField::Kind(LeaveKind::Sick),
                ],
            )
            .unwrap();
        let record = moved.leave(emp_id, first).unwrap();
        assert_eq!(record.start_date, date(2024, 7, 1));
        assert_eq!(record.end_date, date(2024, 7, 5));
        assert_eq!(record.kind, LeaveKind::Sick);
        assert_eq!(store.leave(emp_id, first).unwrap().start_date, date(2024, 6, 10));
    }

    #[test]
    fn test_checked_edit_rejects_whole_edit() {
        let store = alice_store()
            .add_leave(NewLeave::new(
                "Alice",
                "Engineer",
                date(2024, 6, 20),
                date(2024, 6, 21),
                LeaveKind::DayOff,
            ))
            .unwrap();
        let alice = store.employee_by_name("Alice").unwrap();
        let (emp_id, first) = (alice.id, alice.leaves[0].id);

        // The kind change is fine on its own but the new end lands on the day off
        let err = store
            .edit_leave_checked(
                emp_id,
                first,
                &[
                    LeaveField::Kind(LeaveKind::Sick),
                    LeaveField::EndDate(date(2024, 6, 20)),
                ],
            )
            .unwrap_err();
        assert!(err.is_conflict());
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let store = alice_store()
            .add_leave(NewLeave::new(
                "Alice",
                "Engineer",
                date(2024, 6, 15),
                date(2024, 6, 16),
                LeaveKind::Sick,
            ))
            .unwrap();
        let alice = store.employee_by_name("Alice").unwrap();
        let (emp_id, first, second) = (alice.id, alice.leaves[0].id, alice.leaves[1].id);

        let after = store.delete_leave(emp_id, first);
        let remaining = &after.employee(emp_id).unwrap().leaves;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, second);
    }

    #[test]
    fn test_delete_last_leave_keeps_employee() {
        let store = alice_store();
        let alice = store.employee_by_name("Alice").unwrap();

        let after = store.delete_leave(alice.id, alice.leaves[0].id);
        assert_eq!(after.len(), 1);
        assert!(after.employee(alice.id).unwrap().leaves.is_empty());
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let store = alice_store();
        let alice = store.employee_by_name("Alice").unwrap();
        assert_eq!(store.delete_leave(alice.id, LeaveId::new()), store);
    }

    #[test]
    fn test_clear() {
        assert!(alice_store().clear().is_empty());
    }

    #[test]
    fn test_from_employees_drops_duplicates() {
        let alice = Employee::new("Alice", "Engineer");
        let mut same_id = Employee::new("Alicia", "Engineer");
        same_id.id = alice.id;
        let same_name = Employee::new("Alice", "Manager");
        let bob = Employee::new("Bob", "Designer");

        let store = VacationStore::from_employees(vec![alice, same_id, same_name, bob]);
        let names: Vec<_> = store.employees().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_find_employee_by_name_or_id() {
        let store = alice_store();
        let alice = store.employee_by_name("Alice").unwrap();

        assert_eq!(store.find_employee("Alice").unwrap().id, alice.id);
        assert_eq!(store.find_employee(&alice.id.to_string()).unwrap().id, alice.id);
        assert!(store.find_employee("Carol").is_none());
    }
}
