//! Audit logging for the leave tracker
//!
//! Records every create, update, delete and clear with before/after values in
//! an append-only, line-delimited JSON log.
//!
//! - `AuditEntry`: one operation on an employee or leave record.
//! - `AuditLogger`: appends entries to the log file and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
