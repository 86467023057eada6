//! Leave session
//!
//! The explicit context handed to command handlers. It owns the current store
//! snapshot, swaps in the new snapshot produced by each store operation and
//! persists it right away. Persistence and audit writes are fire-and-forget:
//! a failure is logged and the in-memory snapshot is kept.

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::{LeaveError, LeaveResult};
use crate::models::{EmployeeId, LeaveField, LeaveId, LeaveRecord, NewLeave, VacationStore};
use crate::storage::Persistence;

/// Result of a successful `add_leave`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedLeave {
    pub employee_id: EmployeeId,
    pub employee_name: String,
    /// Whether the employee was created by this submission
    pub new_employee: bool,
    pub leave: LeaveRecord,
}

/// Current store snapshot plus its persistence collaborator
pub struct LeaveSession<P: Persistence> {
    persistence: P,
    audit: Option<AuditLogger>,
    store: VacationStore,
}

impl<P: Persistence> LeaveSession<P> {
    /// Load the persisted snapshot; absent or malformed data starts empty
    pub fn open(persistence: P, audit: Option<AuditLogger>) -> Self {
        let store = VacationStore::from_employees(persistence.load());
        tracing::debug!(
            employees = store.len(),
            leaves = store.leave_count(),
            "Opened leave session"
        );

        Self {
            persistence,
            audit,
            store,
        }
    }

    pub fn store(&self) -> &VacationStore {
        &self.store
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Book a leave; nothing changes if validation or the overlap check fails
    pub fn add_leave(&mut self, request: NewLeave) -> LeaveResult<AddedLeave> {
        let name = request.employee_name.trim().to_string();
        let new_employee = self.store.employee_by_name(&name).is_none();

        let next = self.store.add_leave(request)?;

        let employee = next
            .employee_by_name(&name)
            .ok_or_else(|| LeaveError::employee_not_found(name.as_str()))?;
        let leave = employee
            .leaves
            .last()
            .cloned()
            .ok_or_else(|| LeaveError::leave_not_found(name.as_str()))?;

        let added = AddedLeave {
            employee_id: employee.id,
            employee_name: employee.name.clone(),
            new_employee,
            leave,
        };

        if new_employee {
            self.record(AuditEntry::create(
                EntityType::Employee,
                added.employee_id.to_string(),
                Some(added.employee_name.clone()),
                employee,
            ));
        } else {
            self.record(AuditEntry::create(
                EntityType::Leave,
                added.leave.id.to_string(),
                Some(added.employee_name.clone()),
                &added.leave,
            ));
        }

        tracing::debug!(
            employee = %added.employee_name,
            leave = %added.leave.id,
            "Added leave"
        );
        self.commit(next);
        Ok(added)
    }

    /// Replace one field without re-validation.
    ///
    /// Returns `false` when nothing changed (unknown ids or the same value).
    pub fn edit_leave_field(
        &mut self,
        employee_id: EmployeeId,
        leave_id: LeaveId,
        field: LeaveField,
    ) -> bool {
        let next = self.store.edit_leave_field(employee_id, leave_id, field);
        self.apply_edit(employee_id, leave_id, &[field], next)
    }

    /// Apply several fields as one edit, rejecting a result that is reversed
    /// or overlaps another leave. Nothing is applied when the check fails.
    pub fn edit_leave_checked(
        &mut self,
        employee_id: EmployeeId,
        leave_id: LeaveId,
        fields: &[LeaveField],
    ) -> LeaveResult<bool> {
        let next = self.store.edit_leave_checked(employee_id, leave_id, fields)?;
        Ok(self.apply_edit(employee_id, leave_id, fields, next))
    }

    /// Remove one leave; returns `false` if it did not exist
    pub fn delete_leave(&mut self, employee_id: EmployeeId, leave_id: LeaveId) -> bool {
        let Some(removed) = self.store.leave(employee_id, leave_id).cloned() else {
            return false;
        };

        let next = self.store.delete_leave(employee_id, leave_id);
        let owner = self.store.employee(employee_id).map(|e| e.name.clone());
        self.record(AuditEntry::delete(
            EntityType::Leave,
            leave_id.to_string(),
            owner,
            &removed,
        ));

        tracing::debug!(leave = %leave_id, "Deleted leave");
        self.commit(next);
        true
    }

    /// Drop every employee and leave, and remove the persisted blob
    pub fn clear(&mut self) {
        let entry = AuditEntry::clear(self.store.len(), self.store.leave_count());
        self.store = self.store.clear();

        if let Err(e) = self.persistence.clear() {
            tracing::warn!("Failed to clear persisted leave data: {}", e);
        }
        self.record(entry);
    }

    fn apply_edit(
        &mut self,
        employee_id: EmployeeId,
        leave_id: LeaveId,
        fields: &[LeaveField],
        next: VacationStore,
    ) -> bool {
        if next == self.store {
            return false;
        }

        if let (Some(before), Some(after)) = (
            self.store.leave(employee_id, leave_id),
            next.leave(employee_id, leave_id),
        ) {
            let owner = self.store.employee(employee_id).map(|e| e.name.clone());
            self.record(AuditEntry::update(
                EntityType::Leave,
                leave_id.to_string(),
                owner,
                before,
                after,
                Some(describe_changes(before, after, fields)),
            ));
        }

        tracing::debug!(leave = %leave_id, fields = fields.len(), "Edited leave");
        self.commit(next);
        true
    }

    fn commit(&mut self, next: VacationStore) {
        self.store = next;
        if let Err(e) = self.persistence.save(self.store.employees()) {
            tracing::warn!("Failed to persist leave data: {}", e);
        }
    }

    fn record(&self, entry: AuditEntry) {
        if let Some(audit) = &self.audit {
            if let Err(e) = audit.log(&entry) {
                tracing::warn!("Failed to write audit entry: {}", e);
            }
        }
    }
}

fn describe_changes(before: &LeaveRecord, after: &LeaveRecord, fields: &[LeaveField]) -> String {
    fields
        .iter()
        .map(|field| describe_change(before, after, *field))
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe_change(before: &LeaveRecord, after: &LeaveRecord, field: LeaveField) -> String {
    let (old, new) = match field {
        LeaveField::StartDate(_) => (before.start_date.to_string(), after.start_date.to_string()),
        LeaveField::EndDate(_) => (before.end_date.to_string(), after.end_date.to_string()),
        LeaveField::Kind(_) => (
            before.kind.as_str().to_string(),
            after.kind.as_str().to_string(),
        ),
    };
    format!("{}: {} -> {}", field.name(), old, new)
}
