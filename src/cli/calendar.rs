//! Calendar CLI commands
//!
//! Implements the company calendar, per-employee timelines and the
//! who-is-away view for a single day.

use clap::Subcommand;

use super::{find_employee, parse_date, parse_kind_filter, parse_month};
use crate::config::Settings;
use crate::display::{format_calendar, format_day};
use crate::error::LeaveResult;
use crate::models::date_range::today;
use crate::services::calendar::MAX_CALENDAR_MONTHS;
use crate::services::{company_window, CalendarProjector, LeaveSession};
use crate::storage::Persistence;

/// Calendar subcommands
#[derive(Subcommand)]
pub enum CalendarCommands {
    /// Month grids for every employee, starting at the current month
    Company {
        /// First month to show (YYYY-MM)
        #[arg(short, long)]
        from: Option<String>,
        /// Number of months (defaults to the configured window)
        #[arg(
            short,
            long,
            value_parser = clap::value_parser!(u32).range(1..=MAX_CALENDAR_MONTHS as i64)
        )]
        months: Option<u32>,
        /// Only show one leave kind
        #[arg(short, long)]
        kind: Option<String>,
    },
    /// Month grids covering one employee's leaves
    Employee {
        /// Employee name or ID
        employee: String,
        /// Only show one leave kind
        #[arg(short, long)]
        kind: Option<String>,
    },
    /// Who is on leave on a given date
    Day {
        /// Date to inspect (YYYY-MM-DD)
        date: String,
        /// Only show one leave kind
        #[arg(short, long)]
        kind: Option<String>,
    },
}

/// Handle a calendar command
pub fn handle_calendar_command<P: Persistence>(
    session: &LeaveSession<P>,
    settings: &Settings,
    cmd: CalendarCommands,
) -> LeaveResult<()> {
    let date_format = settings.date_format.as_str();
    let week_start = settings.week_start.weekday();
    let today = today();

    match cmd {
        CalendarCommands::Company { from, months, kind } => {
            let anchor = match from.as_deref() {
                Some(month) => parse_month(month)?,
                None => today,
            };
            let months = months.unwrap_or_else(|| settings.window_months());

            let grids = CalendarProjector::new(session.store(), today)
                .with_filter(parse_kind_filter(kind.as_deref())?)
                .build_calendar(company_window(anchor, months));
            print!("{}", format_calendar(&grids, week_start, date_format));
        }

        CalendarCommands::Employee { employee, kind } => {
            let found = find_employee(session.store(), &employee)?;
            println!("{}\n", found);

            let grids = CalendarProjector::new(session.store(), today)
                .with_filter(parse_kind_filter(kind.as_deref())?)
                .employee_calendar(found);
            print!("{}", format_calendar(&grids, week_start, date_format));
        }

        CalendarCommands::Day { date, kind } => {
            let date = parse_date(&date)?;
            let leaves = CalendarProjector::new(session.store(), today)
                .with_filter(parse_kind_filter(kind.as_deref())?)
                .project_day(date);
            print!("{}", format_day(date, &leaves, date_format));
        }
    }

    Ok(())
}
