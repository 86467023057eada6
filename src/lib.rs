//! Leave Tracker - vacation, sick leave and day-off scheduling
//!
//! This library provides the core of the leave tracker: an immutable store of
//! employees and their leaves that refuses overlapping bookings, and a
//! calendar projector that turns a store snapshot into day projections and
//! month grids.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Date ranges, overlap checks, leave records and the store
//! - `storage`: JSON blob persistence
//! - `services`: Calendar projection, statistics and the leave session
//! - `audit`: Audit logging system
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `leave` binary
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use leave_tracker::models::{LeaveKind, NewLeave, VacationStore};
//! use leave_tracker::services::project_day;
//!
//! let day = |d| NaiveDate::from_ymd_opt(2024, 6, d).unwrap();
//! let store = VacationStore::new()
//!     .add_leave(NewLeave::new("Alice", "Engineer", day(10), day(14), LeaveKind::Vacation))
//!     .unwrap();
//!
//! assert_eq!(project_day(&store, day(11), None).len(), 1);
//! assert!(project_day(&store, day(15), None).is_empty());
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LeaveError, LeaveResult};
