//! Service layer for the leave tracker
//!
//! The service layer sits between the command handlers and the pure store:
//! it projects calendars, computes statistics and owns the session that
//! persists each new snapshot.

pub mod calendar;
pub mod session;
pub mod stats;

pub use calendar::{
    company_window, employee_window, project_day, ActiveLeave, CalendarProjector, DayCell,
    MonthGrid, SpanPosition,
};
pub use session::{AddedLeave, LeaveSession};
pub use stats::{EmployeeStats, RangePreview};
