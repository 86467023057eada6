//! End-to-end booking scenarios against the library API

use chrono::NaiveDate;
use leave_tracker::models::{
    days_between, has_conflict, inclusive_day_count, DateRange, LeaveField, LeaveKind, NewLeave,
    VacationStore,
};
use leave_tracker::services::{project_day, CalendarProjector, LeaveSession, SpanPosition};
use leave_tracker::storage::{EmployeeRepository, MemoryPersistence, Persistence};
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn alice(start: NaiveDate, end: NaiveDate, kind: LeaveKind) -> NewLeave {
    NewLeave::new("Alice", "Engineer", start, end, kind)
}

/// Alice with a vacation on 10..14 June and sick leave on 15..16 June
fn june_store() -> VacationStore {
    VacationStore::new()
        .add_leave(alice(date(2024, 6, 10), date(2024, 6, 14), LeaveKind::Vacation))
        .unwrap()
        .add_leave(alice(date(2024, 6, 15), date(2024, 6, 16), LeaveKind::Sick))
        .unwrap()
}

#[test]
fn first_booking_creates_employee() {
    let store = VacationStore::new()
        .add_leave(alice(date(2024, 6, 10), date(2024, 6, 14), LeaveKind::Vacation))
        .unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.leave_count(), 1);
    let leave = &store.employees()[0].leaves[0];
    assert_eq!(leave.duration_days(), 5);
}

#[test]
fn overlapping_booking_is_rejected_without_mutation() {
    let store = VacationStore::new()
        .add_leave(alice(date(2024, 6, 10), date(2024, 6, 14), LeaveKind::Vacation))
        .unwrap();
    let before = store.clone();

    let err = store
        .add_leave(alice(date(2024, 6, 12), date(2024, 6, 13), LeaveKind::Sick))
        .unwrap_err();

    assert!(err.is_conflict());
    assert_eq!(store, before);
}

#[test]
fn adjacent_booking_is_accepted() {
    let store = june_store();

    assert_eq!(store.len(), 1);
    assert_eq!(store.employees()[0].leaves.len(), 2);
}

#[test]
fn project_day_picks_the_active_leave() {
    let store = june_store();
    let leaves = &store.employees()[0].leaves;

    let on_11th = project_day(&store, date(2024, 6, 11), None);
    assert_eq!(on_11th.len(), 1);
    assert_eq!(on_11th[0].leave.id, leaves[0].id);
    assert_eq!(on_11th[0].employee_name, "Alice");
    assert_eq!(on_11th[0].employee_position, "Engineer");
    assert_eq!(on_11th[0].span, SpanPosition::Interior);

    let on_15th = project_day(&store, date(2024, 6, 15), None);
    assert_eq!(on_15th.len(), 1);
    assert_eq!(on_15th[0].leave.id, leaves[1].id);
    assert_eq!(on_15th[0].span, SpanPosition::First);
}

#[test]
fn june_grid_has_thirty_cells() {
    let store = june_store();
    let grid = CalendarProjector::new(&store, date(2024, 6, 12)).build_month_grid(date(2024, 6, 1));

    assert_eq!(grid.days.len(), 30);
    assert_eq!(grid.days[0].date, date(2024, 6, 1));
    assert_eq!(grid.days[29].date, date(2024, 6, 30));
    assert!(grid.days[0].is_weekend);
    assert!(grid.days[11].is_today);
}

#[test]
fn day_count_matches_iteration() {
    let (start, end) = (date(2024, 2, 27), date(2024, 3, 2));
    assert_eq!(inclusive_day_count(start, start).unwrap(), 1);
    assert_eq!(
        inclusive_day_count(start, end).unwrap(),
        days_between(start, end).count() as i64
    );
}

#[test]
fn overlap_is_symmetric() {
    let a = DateRange::new(date(2024, 6, 10), date(2024, 6, 14)).unwrap();
    let b = DateRange::new(date(2024, 6, 14), date(2024, 6, 20)).unwrap();
    let c = DateRange::single(date(2024, 6, 15));

    assert!(has_conflict(&a, &[b]));
    assert!(has_conflict(&b, &[a]));
    assert!(!has_conflict(&a, &[c]));
    assert!(!has_conflict(&c, &[a]));
}

#[test]
fn edit_then_delete() {
    let store = june_store();
    let employee = &store.employees()[0];
    let (employee_id, first, second) = (employee.id, employee.leaves[0].id, employee.leaves[1].id);

    let edited = store.edit_leave_field(employee_id, first, LeaveField::Kind(LeaveKind::DayOff));
    assert_eq!(edited.leave(employee_id, first).unwrap().kind, LeaveKind::DayOff);

    let deleted = edited.delete_leave(employee_id, first);
    assert!(deleted.leave(employee_id, first).is_none());
    assert!(deleted.leave(employee_id, second).is_some());
    assert_eq!(deleted.len(), 1);
}

#[test]
fn session_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("employees.json");

    {
        let mut session = LeaveSession::open(EmployeeRepository::new(path.clone()), None);
        session
            .add_leave(alice(date(2024, 6, 10), date(2024, 6, 14), LeaveKind::Vacation))
            .unwrap();
        session
            .add_leave(alice(date(2024, 6, 15), date(2024, 6, 16), LeaveKind::Sick))
            .unwrap();
    }

    let reopened = LeaveSession::open(EmployeeRepository::new(path), None);
    assert_eq!(reopened.store().len(), 1);
    assert_eq!(reopened.store().leave_count(), 2);
    assert_eq!(
        project_day(reopened.store(), date(2024, 6, 15), Some(LeaveKind::Sick)).len(),
        1
    );
}

#[test]
fn malformed_blob_loads_empty() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("employees.json");
    std::fs::write(&path, "{ not json").unwrap();

    let session = LeaveSession::open(EmployeeRepository::new(path), None);
    assert!(session.store().is_empty());
}

#[test]
fn clear_wipes_persisted_data() {
    let persistence = MemoryPersistence::new();
    let mut session = LeaveSession::open(persistence, None);
    session
        .add_leave(alice(date(2024, 6, 10), date(2024, 6, 14), LeaveKind::Vacation))
        .unwrap();

    session.clear();
    assert!(session.persistence().load().is_empty());
}
