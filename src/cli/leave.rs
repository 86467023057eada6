//! Leave CLI commands
//!
//! Implements booking, listing, editing and deleting leaves.

use chrono::NaiveDate;
use clap::Subcommand;

use super::{find_employee, find_leave, parse_date, parse_kind};
use crate::config::Settings;
use crate::display::{format_date, format_employee_details, format_employee_list, kind_label};
use crate::error::LeaveResult;
use crate::models::{LeaveField, LeaveKind, LeaveRecord, NewLeave};
use crate::services::{LeaveSession, RangePreview};
use crate::storage::Persistence;

/// Leave subcommands
#[derive(Subcommand)]
pub enum LeaveCommands {
    /// Book a leave, creating the employee on first use
    Add {
        /// Employee name
        name: String,
        /// Employee position (only used for new employees)
        position: String,
        /// First day of leave (YYYY-MM-DD)
        start: String,
        /// Last day of leave (YYYY-MM-DD)
        end: String,
        /// Leave kind (vacation, sick, day_off)
        #[arg(short, long, default_value = "vacation")]
        kind: String,
    },
    /// List all employees with leave totals
    List,
    /// Show an employee and their leaves
    Show {
        /// Employee name or ID
        employee: String,
    },
    /// Change the dates or kind of a leave
    Edit {
        /// Employee name or ID
        employee: String,
        /// Leave ID
        leave: String,
        /// New first day (YYYY-MM-DD)
        #[arg(short, long)]
        start: Option<String>,
        /// New last day (YYYY-MM-DD)
        #[arg(short, long)]
        end: Option<String>,
        /// New leave kind
        #[arg(short, long)]
        kind: Option<String>,
        /// Reject edits that reverse the dates or overlap another leave
        #[arg(long)]
        strict: bool,
    },
    /// Delete a leave
    Delete {
        /// Employee name or ID
        employee: String,
        /// Leave ID
        leave: String,
    },
    /// Remove every employee and leave
    Clear {
        /// Confirm the removal
        #[arg(long)]
        yes: bool,
    },
}

/// Handle a leave command
pub fn handle_leave_command<P: Persistence>(
    session: &mut LeaveSession<P>,
    settings: &Settings,
    cmd: LeaveCommands,
) -> LeaveResult<()> {
    let date_format = settings.date_format.as_str();

    match cmd {
        LeaveCommands::Add {
            name,
            position,
            start,
            end,
            kind,
        } => {
            let request = NewLeave::new(
                name,
                position,
                parse_date(&start)?,
                parse_date(&end)?,
                parse_kind(&kind)?,
            );
            let added = session.add_leave(request)?;
            let leave = &added.leave;

            println!(
                "Added {} for {}",
                kind_label(leave.kind).to_lowercase(),
                added.employee_name
            );
            if added.new_employee {
                println!("  New employee: {}", added.employee_id);
            }
            println!("  ID:    {}", leave.id);
            println!(
                "  Dates: {} -> {}",
                format_date(leave.start_date, date_format),
                format_date(leave.end_date, date_format)
            );
            if let Some(range) = leave.range() {
                let preview = RangePreview::of(&range);
                println!(
                    "  Days:  {} ({} working, {} weekend)",
                    preview.total_days, preview.working_days, preview.weekend_days
                );
            }
        }

        LeaveCommands::List => {
            print!("{}", format_employee_list(session.store().employees()));
        }

        LeaveCommands::Show { employee } => {
            let found = find_employee(session.store(), &employee)?;
            print!("{}", format_employee_details(found, date_format));
        }

        LeaveCommands::Edit {
            employee,
            leave,
            start,
            end,
            kind,
            strict,
        } => {
            let start = start.as_deref().map(parse_date).transpose()?;
            let end = end.as_deref().map(parse_date).transpose()?;
            let kind = kind.as_deref().map(parse_kind).transpose()?;

            if start.is_none() && end.is_none() && kind.is_none() {
                println!("No changes specified. Use --start, --end or --kind.");
                return Ok(());
            }

            let found = find_employee(session.store(), &employee)?;
            let record = find_leave(found, &leave)?;
            let (employee_id, leave_id) = (found.id, record.id);
            let fields = edit_fields(record, start, end, kind);

            let changed = if strict {
                session.edit_leave_checked(employee_id, leave_id, &fields)?
            } else {
                fields.into_iter().fold(false, |changed, field| {
                    session.edit_leave_field(employee_id, leave_id, field) || changed
                })
            };

            if !changed {
                println!("No changes made.");
                return Ok(());
            }

            if let Some(updated) = session.store().leave(employee_id, leave_id) {
                println!("Updated leave: {}", updated.id);
                println!(
                    "  {} {} -> {}",
                    kind_label(updated.kind),
                    format_date(updated.start_date, date_format),
                    format_date(updated.end_date, date_format)
                );
                if updated.range().is_none() {
                    println!("  Warning: this leave now ends before it starts.");
                }
            }
        }

        LeaveCommands::Delete { employee, leave } => {
            let found = find_employee(session.store(), &employee)?;
            let record = find_leave(found, &leave)?;
            let (employee_name, employee_id, leave_id) = (found.name.clone(), found.id, record.id);

            if session.delete_leave(employee_id, leave_id) {
                println!("Deleted leave {} of {}", leave_id, employee_name);
            }
        }

        LeaveCommands::Clear { yes } => {
            if !yes {
                println!("This removes every employee and leave. Re-run with --yes to confirm.");
                return Ok(());
            }

            let (employees, leaves) = (session.store().len(), session.store().leave_count());
            session.clear();
            println!("Cleared {} employees and {} leaves.", employees, leaves);
        }
    }

    Ok(())
}

/// Order the fields of an edit so that moving a leave never passes through a
/// reversed interval: when the new start lies past the current end, the end
/// moves first. Lenient edits apply and audit the fields one at a time.
fn edit_fields(
    current: &LeaveRecord,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    kind: Option<LeaveKind>,
) -> Vec<LeaveField> {
    let start_field = start.map(LeaveField::StartDate);
    let end_field = end.map(LeaveField::EndDate);
    let end_first = matches!(start, Some(s) if s > current.end_date);

    let dates = if end_first {
        [end_field, start_field]
    } else {
        [start_field, end_field]
    };

    dates
        .into_iter()
        .chain(std::iter::once(kind.map(LeaveField::Kind)))
        .flatten()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record() -> LeaveRecord {
        LeaveRecord::new(date(2024, 6, 10), date(2024, 6, 14), LeaveKind::Vacation)
    }

    #[test]
    fn test_edit_fields_start_first_by_default() {
        let fields = edit_fields(
            &record(),
            Some(date(2024, 6, 11)),
            Some(date(2024, 6, 20)),
            Some(LeaveKind::Sick),
        );
        assert_eq!(
            fields,
            vec![
                LeaveField::StartDate(date(2024, 6, 11)),
                LeaveField::EndDate(date(2024, 6, 20)),
                LeaveField::Kind(LeaveKind::Sick),
            ]
        );
    }

    #[test]
    fn test_edit_fields_end_first_when_moving_later() {
        let fields = edit_fields(&record(), Some(date(2024, 7, 1)), Some(date(2024, 7, 5)), None);
        assert_eq!(
            fields,
            vec![
                LeaveField::EndDate(date(2024, 7, 5)),
                LeaveField::StartDate(date(2024, 7, 1)),
            ]
        );
    }

    #[test]
    fn test_edit_fields_single() {
        let fields = edit_fields(&record(), None, None, Some(LeaveKind::DayOff));
        assert_eq!(fields, vec![LeaveField::Kind(LeaveKind::DayOff)]);
    }
}
